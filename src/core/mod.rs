//! Core domain types
//!
//! Words and the feedback a guess receives. Everything here is pure and
//! independent of solving strategy.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackColor, FeedbackParseError};
pub use word::{Word, WordError};
