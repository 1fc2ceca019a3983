//! Interactive mode
//!
//! The player enters feedback for each suggested guess as comma-separated
//! codes (`2` exact, `1` present, `0` absent).

use crate::core::Feedback;
use crate::solver::{
    FrequencyTable, GameSession, RoundOutcome, SessionState, SolverError, rank_candidates,
};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveOutcome {
    Won { guesses: usize },
    /// The feedback ruled out every candidate
    Exhausted { guesses: usize },
    Quit,
    EndOfInput,
}

#[derive(Debug, Error)]
pub enum InteractiveError {
    #[error("console I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Drive `session` from player input until the game ends
///
/// Malformed feedback is reported and asked for again; it never reaches the
/// solver. With `silent` set, prompts and narration are suppressed.
///
/// # Errors
///
/// Returns an error on I/O failure, or if the session is already finished.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
    silent: bool,
) -> Result<InteractiveOutcome, InteractiveError> {
    let mut guess = match session.state() {
        SessionState::AwaitingFirstGuess => session.start()?.clone(),
        SessionState::AwaitingFeedback => session
            .current_guess()
            .cloned()
            .ok_or(SolverError::NotStarted)?,
        SessionState::Won | SessionState::Exhausted => return Err(SolverError::GameOver.into()),
    };

    if !silent {
        writeln!(output, "{}", "-".repeat(35))?;
        writeln!(output, "Enter start word: {}", guess.text().bright_white().bold())?;
        writeln!(
            output,
            "What's the result? Enter comma separated (exact = 2, present = 1, absent = 0)"
        )?;
    }

    loop {
        if !silent {
            write!(output, "> ")?;
            output.flush()?;
        }

        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(InteractiveOutcome::EndOfInput);
        }

        let Ok(line) = std::str::from_utf8(&raw) else {
            warn!("rejected feedback line that is not valid UTF-8");
            if !silent {
                writeln!(output, "Error parsing the result (not valid text), please enter again")?;
            }
            continue;
        };

        let line = line.trim();
        if matches!(line, "quit" | "q" | "exit") {
            return Ok(InteractiveOutcome::Quit);
        }

        let feedback = match Feedback::parse_with_len(line, session.word_len()) {
            Ok(feedback) => feedback,
            Err(e) => {
                warn!("rejected feedback {line:?}: {e}");
                if !silent {
                    writeln!(output, "Error parsing the result ({e}), please enter again")?;
                }
                continue;
            }
        };

        match session.submit_feedback(&feedback) {
            Ok(RoundOutcome::Won { guesses }) => {
                if !silent {
                    writeln!(
                        output,
                        "{} Solved {} in {guesses} {}.",
                        "Congrats, you won!".green().bold(),
                        guess.text().to_uppercase(),
                        if guesses == 1 { "guess" } else { "guesses" }
                    )?;
                }
                return Ok(InteractiveOutcome::Won { guesses });
            }
            Ok(RoundOutcome::Continue {
                next_guess,
                remaining,
            }) => {
                if !silent {
                    writeln!(
                        output,
                        "Guessed new word: {} ({remaining} candidates left)",
                        next_guess.text().bright_white().bold()
                    )?;
                    print_alternatives(session, output)?;
                }
                guess = next_guess;
            }
            Err(SolverError::NoCandidateAvailable) => {
                if !silent {
                    writeln!(
                        output,
                        "{}",
                        "No word found: no candidate matches the feedback given.".red()
                    )?;
                }
                return Ok(InteractiveOutcome::Exhausted {
                    guesses: session.score(),
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Show the best-ranked remaining candidates when only a few are left
fn print_alternatives<W: Write>(session: &GameSession, output: &mut W) -> io::Result<()> {
    let candidates = session.candidates();
    if candidates.len() < 2 || candidates.len() > 10 {
        return Ok(());
    }

    let Ok(table) = FrequencyTable::compute(candidates) else {
        return Ok(());
    };

    let list: Vec<String> = rank_candidates(candidates, &table)
        .into_iter()
        .map(|(word, score)| format!("{word} ({score})"))
        .collect();
    writeln!(output, "  Remaining: {}", list.join(", "))
}
