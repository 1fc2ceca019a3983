//! Candidate scoring by positional letter rank
//!
//! A word's score is the sum of its letters' rank indices in the frequency
//! table. Lower scores mean the letters are more typical for their positions.

use super::{FrequencyTable, SolverError};
use crate::core::Word;

/// Sum of per-position rank indices for `word`
///
/// A letter missing from a position's ranking scores that ranking's length,
/// which is worse than any ranked letter.
#[must_use]
pub fn score_word(word: &Word, table: &FrequencyTable) -> usize {
    word.chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| {
            table
                .rank_of(position, letter)
                .unwrap_or_else(|| table.ranking(position).len())
        })
        .sum()
}

/// Candidate with the lowest score; the first one found wins ties
///
/// # Errors
/// Returns `SolverError::NoCandidateAvailable` if `candidates` is empty.
pub fn pick_best_candidate<'a>(
    candidates: &'a [Word],
    table: &FrequencyTable,
) -> Result<&'a Word, SolverError> {
    // min_by_key keeps the first of equal minima
    candidates
        .iter()
        .min_by_key(|word| score_word(word, table))
        .ok_or(SolverError::NoCandidateAvailable)
}

/// All candidates with their scores, best first
///
/// The sort is stable, so equal scores keep candidate order.
#[must_use]
pub fn rank_candidates<'a>(candidates: &'a [Word], table: &FrequencyTable) -> Vec<(&'a Word, usize)> {
    let mut scored: Vec<(&Word, usize)> = candidates
        .iter()
        .map(|word| (word, score_word(word, table)))
        .collect();
    scored.sort_by_key(|&(_, score)| score);
    scored
}
