//! Guess feedback: classification and parsing
//!
//! Feedback is one color per position:
//! - 0 = Absent (letter not in the target)
//! - 1 = Present (letter in the target, other position)
//! - 2 = Exact (letter at this position)
//!
//! Classification does not consume target letters, so a repeated guess letter
//! can be marked Present more often than the target contains it.

use super::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color for a single guessed position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackColor {
    Absent,
    Present,
    Exact,
}

impl FeedbackColor {
    /// Numeric code used by the interactive protocol
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    /// Parse a single symbol: a digit code, or a `G`/`Y`/`-` letter
    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for unparseable feedback input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("no feedback given")]
    Empty,
    #[error("invalid feedback value {0:?}, expected 0, 1 or 2")]
    InvalidToken(String),
    #[error("expected {expected} feedback values, got {found}")]
    WrongCount { expected: usize, found: usize },
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<FeedbackColor>);

impl Feedback {
    #[must_use]
    pub const fn new(colors: Vec<FeedbackColor>) -> Self {
        Self(colors)
    }

    /// All-Exact feedback of the given length
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self(vec![FeedbackColor::Exact; len])
    }

    /// Compute the feedback `guess` receives when `target` is the answer
    ///
    /// Per position: Exact if the letters match, Present if the target contains
    /// the guessed letter anywhere, Absent otherwise.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Feedback, Word};
    ///
    /// let target = Word::new("abcde").unwrap();
    /// let guess = Word::new("abcxx").unwrap();
    /// assert_eq!(Feedback::classify(&target, &guess).to_codes(), "2,2,2,0,0");
    /// ```
    #[must_use]
    pub fn classify(target: &Word, guess: &Word) -> Self {
        let colors = guess
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if target.char_at(i) == Some(letter) {
                    FeedbackColor::Exact
                } else if target.has_letter(letter) {
                    FeedbackColor::Present
                } else {
                    FeedbackColor::Absent
                }
            })
            .collect();

        Self(colors)
    }

    /// Parse feedback and check it has exactly `expected` positions
    ///
    /// # Errors
    /// Returns `FeedbackParseError` for malformed tokens or a wrong count.
    pub fn parse_with_len(input: &str, expected: usize) -> Result<Self, FeedbackParseError> {
        let feedback: Self = input.parse()?;
        if feedback.len() != expected {
            return Err(FeedbackParseError::WrongCount {
                expected,
                found: feedback.len(),
            });
        }
        Ok(feedback)
    }

    #[must_use]
    pub fn colors(&self) -> &[FeedbackColor] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == FeedbackColor::Exact)
    }

    /// Count positions with the given color
    #[must_use]
    pub fn count(&self, color: FeedbackColor) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Render as comma-separated codes, e.g. `2,1,0,0,2`
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0
            .iter()
            .map(|c| c.code().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Accepts `2,1,0,0,2` (whitespace around tokens allowed) or a compact
    /// form such as `GY--G` / `21002`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FeedbackParseError::Empty);
        }

        let colors = if s.contains(',') {
            s.split(',')
                .map(|token| {
                    let token = token.trim();
                    token
                        .parse::<u8>()
                        .ok()
                        .and_then(FeedbackColor::from_code)
                        .ok_or_else(|| FeedbackParseError::InvalidToken(token.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            s.chars()
                .map(|ch| {
                    FeedbackColor::from_symbol(ch)
                        .ok_or_else(|| FeedbackParseError::InvalidToken(ch.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self(colors))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_codes())
    }
}
