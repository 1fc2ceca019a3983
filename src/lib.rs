//! Wordle Guesser
//!
//! A word-guessing assistant for Wordle-style games. It narrows the candidate
//! set from exact/present/absent feedback and proposes the next guess, either
//! interactively or in self-play simulation.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::{Feedback, Word};
//! use wordle_guesser::solver::{GameMode, GameSession, RoundOutcome, SessionConfig, rng_from_seed};
//! use wordle_guesser::wordlists::{WORDS, words_from_slice};
//!
//! let dictionary = words_from_slice(WORDS);
//! let target = Word::new("crane").unwrap();
//! let mut session = GameSession::new(
//!     dictionary,
//!     SessionConfig::new(GameMode::ImprovedGuessing),
//!     rng_from_seed(Some(42)),
//! )
//! .unwrap();
//!
//! let mut guess = session.start().unwrap().clone();
//! loop {
//!     match session.submit_feedback(&Feedback::classify(&target, &guess)).unwrap() {
//!         RoundOutcome::Won { guesses } => {
//!             println!("solved in {guesses}");
//!             break;
//!         }
//!         RoundOutcome::Continue { next_guess, .. } => guess = next_guess,
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Constraint filtering, frequency scoring and the game session
pub mod solver;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
