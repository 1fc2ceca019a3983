//! Accumulated feedback constraints and candidate filtering
//!
//! Every feedback position becomes a [`PositionConstraint`] filed under its
//! color. Filtering runs three stages in a fixed order: exact, absent, present.

use crate::core::{Feedback, FeedbackColor, Word};
use log::debug;

/// A single feedback datum: `letter` at `position` received `color`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionConstraint {
    pub position: usize,
    pub letter: u8,
    pub color: FeedbackColor,
}

impl PositionConstraint {
    #[must_use]
    pub const fn new(position: usize, letter: u8, color: FeedbackColor) -> Self {
        Self {
            position,
            letter,
            color,
        }
    }
}

/// All constraints gathered during one game
///
/// Constraints are only ever appended; nothing is reset mid-game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    exact: Vec<PositionConstraint>,
    present: Vec<PositionConstraint>,
    absent: Vec<PositionConstraint>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// File a constraint under the bucket for its color
    pub fn push(&mut self, constraint: PositionConstraint) {
        match constraint.color {
            FeedbackColor::Exact => self.exact.push(constraint),
            FeedbackColor::Present => self.present.push(constraint),
            FeedbackColor::Absent => self.absent.push(constraint),
        }
    }

    /// Record one constraint per position of `guess`
    ///
    /// Positions beyond the shorter of the two are ignored.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (position, (&letter, &color)) in guess.chars().iter().zip(feedback.colors()).enumerate()
        {
            self.push(PositionConstraint::new(position, letter, color));
        }
    }

    #[must_use]
    pub fn exact(&self) -> &[PositionConstraint] {
        &self.exact
    }

    #[must_use]
    pub fn present(&self) -> &[PositionConstraint] {
        &self.present
    }

    #[must_use]
    pub fn absent(&self) -> &[PositionConstraint] {
        &self.absent
    }

    /// Total number of recorded constraints
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.present.len() + self.absent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reduce `candidates` to the words consistent with every constraint
    ///
    /// The result never contains a word that was not in the input, and keeps
    /// the input order.
    #[must_use]
    pub fn filter(&self, candidates: Vec<Word>) -> Vec<Word> {
        let before = candidates.len();

        let after_exact: Vec<Word> = candidates
            .into_iter()
            .filter(|w| self.matches_exact(w))
            .collect();

        let after_absent: Vec<Word> = after_exact
            .into_iter()
            .filter(|w| self.avoids_absent(w))
            .collect();
        let absent_survivors = after_absent.len();

        let after_present: Vec<Word> = after_absent
            .into_iter()
            .filter(|w| self.satisfies_present(w))
            .collect();

        debug!(
            "filter: {before} candidates -> {absent_survivors} after exact/absent -> {} after present",
            after_present.len()
        );

        after_present
    }

    fn matches_exact(&self, word: &Word) -> bool {
        self.exact
            .iter()
            .all(|c| word.char_at(c.position) == Some(c.letter))
    }

    /// Absent letters are excluded from every position, not just the guessed one
    fn avoids_absent(&self, word: &Word) -> bool {
        !self.absent.iter().any(|c| word.has_letter(c.letter))
    }

    /// Every present letter must appear, and never at a slot it was reported misplaced
    fn satisfies_present(&self, word: &Word) -> bool {
        let has_all = self.present.iter().all(|c| word.has_letter(c.letter));
        let repeats_misplaced = self
            .present
            .iter()
            .any(|c| word.char_at(c.position) == Some(c.letter));

        has_all && !repeats_misplaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackColor::{Absent, Exact, Present};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    #[test]
    fn record_files_constraints_by_color() {
        let mut constraints = ConstraintSet::new();
        let guess = Word::new("abcxx").unwrap();
        let feedback = Feedback::new(vec![Exact, Present, Absent, Absent, Exact]);

        constraints.record(&guess, &feedback);

        assert_eq!(constraints.len(), 5);
        assert_eq!(
            constraints.exact(),
            &[
                PositionConstraint::new(0, b'a', Exact),
                PositionConstraint::new(4, b'x', Exact)
            ]
        );
        assert_eq!(
            constraints.present(),
            &[PositionConstraint::new(1, b'b', Present)]
        );
        assert_eq!(constraints.absent().len(), 2);
    }

    #[test]
    fn record_only_appends() {
        let mut constraints = ConstraintSet::new();
        let feedback = Feedback::new(vec![Absent; 5]);
        constraints.record(&Word::new("crane").unwrap(), &feedback);
        constraints.record(&Word::new("sloth").unwrap(), &feedback);
        assert_eq!(constraints.absent().len(), 10);
    }

    #[test]
    fn filter_exact_and_absent_scenario() {
        let dictionary = words(&["abcde", "abcxx", "xxcde"]);
        let target = Word::new("abcde").unwrap();
        let guess = Word::new("abcxx").unwrap();
        let feedback = Feedback::classify(&target, &guess);
        assert_eq!(feedback.colors(), &[Exact, Exact, Exact, Absent, Absent]);

        let mut constraints = ConstraintSet::new();
        constraints.record(&guess, &feedback);

        assert_eq!(texts(&constraints.filter(dictionary)), vec!["abcde"]);
    }

    #[test]
    fn filter_present_requires_letter_elsewhere() {
        let mut constraints = ConstraintSet::new();
        constraints.push(PositionConstraint::new(0, b'e', Present));

        let survivors = constraints.filter(words(&["eagle", "crane", "stark", "tease"]));

        // eagle has e at the misplaced slot, stark lacks e
        assert_eq!(texts(&survivors), vec!["crane", "tease"]);
    }

    #[test]
    fn filter_present_rejects_any_misplaced_repeat() {
        let mut constraints = ConstraintSet::new();
        constraints.push(PositionConstraint::new(1, b'r', Present));
        constraints.push(PositionConstraint::new(3, b'a', Present));

        let survivors = constraints.filter(words(&["crane", "roast", "rajah", "radar"]));

        // crane: r at 1. radar: a at 3. rajah: a at 3.
        assert_eq!(texts(&survivors), vec!["roast"]);
    }

    #[test]
    fn filter_absent_is_position_independent() {
        let mut constraints = ConstraintSet::new();
        constraints.push(PositionConstraint::new(4, b's', Absent));

        let survivors = constraints.filter(words(&["slate", "crane", "pesto"]));
        assert_eq!(texts(&survivors), vec!["crane"]);
    }

    #[test]
    fn filter_never_grows_and_respects_constraints() {
        let dictionary = words(&[
            "slate", "crane", "trace", "crate", "irate", "grate", "stone", "brine",
        ]);
        let target = Word::new("grate").unwrap();
        let mut constraints = ConstraintSet::new();

        let mut candidates = dictionary;
        for guess in ["crane", "slate", "irate"] {
            let guess = Word::new(guess).unwrap();
            constraints.record(&guess, &Feedback::classify(&target, &guess));

            let before = candidates.len();
            candidates = constraints.filter(candidates);
            assert!(candidates.len() <= before);
            assert!(candidates.contains(&target));

            for word in &candidates {
                for c in constraints.exact() {
                    assert_eq!(word.char_at(c.position), Some(c.letter));
                }
                for c in constraints.absent() {
                    assert!(!word.has_letter(c.letter));
                }
            }
        }
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let dictionary = words(&["slate", "crane"]);
        let constraints = ConstraintSet::new();
        assert!(constraints.is_empty());
        assert_eq!(constraints.filter(dictionary.clone()), dictionary);
    }
}
