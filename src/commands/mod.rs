//! Command implementations

pub mod interactive;
pub mod simulate;

pub use interactive::{InteractiveError, InteractiveOutcome, run_interactive};
pub use simulate::{
    DEFAULT_ROUNDS, SimulationConfig, SimulationStatistics, TrialOutcome, TrialResult,
    play_trial, run_simulation, summarize,
};
