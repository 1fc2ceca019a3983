//! Game session: the per-game solver state machine
//!
//! A session owns the candidate set, the accumulated constraints, the current
//! guess and the guess counter. It moves through
//! `AwaitingFirstGuess -> AwaitingFeedback -> (Won | Exhausted)`.

use super::strategy::{DEFAULT_OPENER, GameMode, RandomStrategy, Strategy, StrategyType};
use super::{ConstraintSet, SolverError};
use crate::core::{Feedback, Word};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the session RNG from an optional seed
///
/// Without a seed the generator is seeded from OS entropy.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Per-session settings
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub mode: GameMode,
    /// Opening word for modes with a fixed opener; `None` uses `DEFAULT_OPENER`
    pub opener: Option<Word>,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self { mode, opener: None }
    }

    #[must_use]
    pub fn with_opener(mut self, opener: Word) -> Self {
        self.opener = Some(opener);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingFirstGuess,
    AwaitingFeedback,
    Won,
    /// No candidate is consistent with the feedback received
    Exhausted,
}

/// Result of a successfully processed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { guesses: usize },
    Continue { next_guess: Word, remaining: usize },
}

/// One game from first guess to win or exhaustion
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    strategy: StrategyType,
    word_len: usize,
    candidates: Vec<Word>,
    constraints: ConstraintSet,
    current_guess: Option<Word>,
    history: Vec<(Word, Feedback)>,
    score: usize,
    state: SessionState,
    rng: StdRng,
}

impl GameSession {
    /// Create a session over `dictionary`
    ///
    /// # Errors
    /// - `SolverError::NoCandidateAvailable` if the dictionary is empty
    /// - `SolverError::MixedWordLengths` if words differ in length
    pub fn new(
        dictionary: Vec<Word>,
        config: SessionConfig,
        rng: StdRng,
    ) -> Result<Self, SolverError> {
        let word_len = dictionary
            .first()
            .ok_or(SolverError::NoCandidateAvailable)?
            .len();

        if let Some(word) = dictionary.iter().find(|w| w.len() != word_len) {
            return Err(SolverError::MixedWordLengths {
                expected: word_len,
                word: word.text().to_string(),
            });
        }

        Ok(Self {
            strategy: config.mode.follow_up_strategy(),
            config,
            word_len,
            candidates: dictionary,
            constraints: ConstraintSet::new(),
            current_guess: None,
            history: Vec::new(),
            score: 0,
            state: SessionState::AwaitingFirstGuess,
            rng,
        })
    }

    /// Pick the opening guess
    ///
    /// # Errors
    /// Returns `SolverError::AlreadyStarted` if called twice.
    pub fn start(&mut self) -> Result<&Word, SolverError> {
        if self.state != SessionState::AwaitingFirstGuess {
            return Err(SolverError::AlreadyStarted);
        }

        let opener = self.opening_guess()?;
        info!("opening with {opener} ({} mode)", self.config.mode);

        self.state = SessionState::AwaitingFeedback;
        Ok(self.current_guess.insert(opener))
    }

    fn opening_guess(&mut self) -> Result<Word, SolverError> {
        if self.config.mode.uses_fixed_opener() {
            let opener = self
                .config
                .opener
                .clone()
                .or_else(|| Word::new(DEFAULT_OPENER).ok());

            match opener {
                Some(word) if word.len() == self.word_len => return Ok(word),
                Some(word) => warn!(
                    "opener {word} has {} letters but the dictionary uses {}, opening randomly",
                    word.len(),
                    self.word_len
                ),
                None => {}
            }
        }

        RandomStrategy
            .select_guess(&self.candidates, &mut self.rng)
            .cloned()
    }

    /// Apply feedback for the current guess and propose the next one
    ///
    /// The guess counter goes up by one for every accepted round, including the
    /// winning one.
    ///
    /// # Errors
    /// - `SolverError::NotStarted` before `start()`
    /// - `SolverError::GameOver` after a win or exhaustion
    /// - `SolverError::FeedbackLength` if the feedback length is wrong; the
    ///   round is not counted
    /// - `SolverError::NoCandidateAvailable` when filtering leaves nothing; the
    ///   session moves to `Exhausted`
    pub fn submit_feedback(&mut self, feedback: &Feedback) -> Result<RoundOutcome, SolverError> {
        match self.state {
            SessionState::AwaitingFirstGuess => return Err(SolverError::NotStarted),
            SessionState::Won | SessionState::Exhausted => return Err(SolverError::GameOver),
            SessionState::AwaitingFeedback => {}
        }

        if feedback.len() != self.word_len {
            return Err(SolverError::FeedbackLength {
                expected: self.word_len,
                found: feedback.len(),
            });
        }

        let guess = self.current_guess.take().ok_or(SolverError::NotStarted)?;
        self.score += 1;
        self.history.push((guess.clone(), feedback.clone()));

        if feedback.is_solved() {
            info!("solved with {guess} after {} guesses", self.score);
            self.current_guess = Some(guess);
            self.state = SessionState::Won;
            return Ok(RoundOutcome::Won {
                guesses: self.score,
            });
        }

        self.constraints.record(&guess, feedback);
        let candidates = std::mem::take(&mut self.candidates);
        self.candidates = self.constraints.filter(candidates);
        debug!(
            "round {}: {guess} -> {feedback}, {} candidates left",
            self.score,
            self.candidates.len()
        );

        match self.strategy.select_guess(&self.candidates, &mut self.rng) {
            Ok(next) => {
                let next_guess = next.clone();
                self.current_guess = Some(next_guess.clone());
                Ok(RoundOutcome::Continue {
                    next_guess,
                    remaining: self.candidates.len(),
                })
            }
            Err(err) => {
                warn!("no candidates remain after {} guesses", self.score);
                self.state = SessionState::Exhausted;
                Err(err)
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// True once the game is won or exhausted
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Won | SessionState::Exhausted)
    }

    /// Number of guesses taken so far
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The guess awaiting feedback, or the winning word once won
    #[must_use]
    pub const fn current_guess(&self) -> Option<&Word> {
        self.current_guess.as_ref()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Guesses played so far with the feedback each received
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.config.mode
    }
}
