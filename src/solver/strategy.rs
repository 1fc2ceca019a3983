//! Guess selection strategies and game modes
//!
//! Defines the Strategy trait, its concrete implementations, and the game
//! modes that combine an opening rule with a follow-up strategy.

use super::scorer::pick_best_candidate;
use super::{FrequencyTable, SolverError};
use crate::core::Word;
use clap::ValueEnum;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Opening word used by the improved modes
pub const DEFAULT_OPENER: &str = "slate";

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidateAvailable` if `candidates` is empty.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError>;
}

/// Uniformly random pick from the candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        candidates
            .choose(rng)
            .ok_or(SolverError::NoCandidateAvailable)
    }
}

/// Lowest positional-rank score over a fresh frequency table
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        _rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        let table = FrequencyTable::compute(candidates)?;
        pick_best_candidate(candidates, &table)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    Random(RandomStrategy),
    Frequency(FrequencyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rng: &mut R,
    ) -> Result<&'a Word, SolverError> {
        match self {
            Self::Random(s) => s.select_guess(candidates, rng),
            Self::Frequency(s) => s.select_guess(candidates, rng),
        }
    }
}

/// How the solver opens and continues a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum GameMode {
    /// Random opener, random follow-ups
    #[value(name = "native")]
    Native,
    /// Fixed opener, random follow-ups
    #[value(name = "improvedStart")]
    ImprovedStart,
    /// Fixed opener, frequency-ranked follow-ups
    #[default]
    #[value(name = "improvedGuessing")]
    ImprovedGuessing,
}

impl GameMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::ImprovedStart => "improvedStart",
            Self::ImprovedGuessing => "improvedGuessing",
        }
    }

    /// Whether the first guess is the configured opener rather than random
    #[must_use]
    pub const fn uses_fixed_opener(self) -> bool {
        !matches!(self, Self::Native)
    }

    /// Strategy for every guess after the first
    #[must_use]
    pub const fn follow_up_strategy(self) -> StrategyType {
        match self {
            Self::Native | Self::ImprovedStart => StrategyType::Random(RandomStrategy),
            Self::ImprovedGuessing => StrategyType::Frequency(FrequencyStrategy),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
