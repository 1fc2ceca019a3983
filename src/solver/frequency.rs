//! Per-position letter frequencies over a candidate set
//!
//! For each position, letters are ranked by how many candidates carry them
//! there. Ties are broken by letter ascending so rankings are reproducible.

use super::SolverError;
use crate::core::Word;
use log::debug;
use rustc_hash::FxHashMap;

/// How often `letter` occurs at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: u8,
    pub count: usize,
}

/// Letter rankings for every position, most frequent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    positions: Vec<Vec<LetterCount>>,
}

impl FrequencyTable {
    /// Count letters per position across `candidates`
    ///
    /// The word length is taken from the first candidate.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidateAvailable` if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    /// use wordle_guesser::solver::FrequencyTable;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("crate").unwrap()];
    /// let table = FrequencyTable::compute(&words).unwrap();
    /// assert_eq!(table.rank_of(3, b'n'), Some(0)); // n ties t, wins on letter order
    /// assert_eq!(table.rank_of(3, b't'), Some(1));
    /// ```
    pub fn compute(candidates: &[Word]) -> Result<Self, SolverError> {
        let word_len = candidates
            .first()
            .ok_or(SolverError::NoCandidateAvailable)?
            .len();

        let mut counts: Vec<FxHashMap<u8, usize>> = vec![FxHashMap::default(); word_len];
        for word in candidates {
            for (position, &letter) in word.chars().iter().take(word_len).enumerate() {
                *counts[position].entry(letter).or_insert(0) += 1;
            }
        }

        let positions = counts
            .into_iter()
            .map(|position_counts| {
                let mut ranking: Vec<LetterCount> = position_counts
                    .into_iter()
                    .map(|(letter, count)| LetterCount { letter, count })
                    .collect();
                ranking.sort_unstable_by(|a, b| {
                    b.count.cmp(&a.count).then_with(|| a.letter.cmp(&b.letter))
                });
                ranking
            })
            .collect();

        debug!(
            "computed letter frequencies over {} candidates",
            candidates.len()
        );

        Ok(Self { positions })
    }

    /// Number of positions covered
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.positions.len()
    }

    /// All rankings, indexed by position
    #[must_use]
    pub fn positions(&self) -> &[Vec<LetterCount>] {
        &self.positions
    }

    /// Ranking at one position, or an empty slice if out of range
    #[must_use]
    pub fn ranking(&self, position: usize) -> &[LetterCount] {
        self.positions.get(position).map_or(&[], Vec::as_slice)
    }

    /// Rank index of `letter` at `position` (0 = most frequent)
    #[must_use]
    pub fn rank_of(&self, position: usize, letter: u8) -> Option<usize> {
        self.ranking(position)
            .iter()
            .position(|entry| entry.letter == letter)
    }
}
