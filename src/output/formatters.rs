//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackColor};
use crate::solver::GameMode;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .colors()
        .iter()
        .map(|color| match color {
            FeedbackColor::Absent => '⬜',
            FeedbackColor::Present => '🟨',
            FeedbackColor::Exact => '🟩',
        })
        .collect()
}

/// Opening line naming the mode a run plays in
#[must_use]
pub fn mode_banner(mode: GameMode) -> String {
    format!("Play game in {mode} mode")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
