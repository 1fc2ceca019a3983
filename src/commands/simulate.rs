//! Self-play simulation
//!
//! Plays the solver against known targets, generating feedback automatically,
//! and aggregates guess counts across many trials.

use crate::core::{Feedback, Word};
use crate::solver::{GameSession, RoundOutcome, SessionConfig, SolverError, rng_from_seed};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Number of trials in a batch unless configured otherwise
pub const DEFAULT_ROUNDS: usize = 5000;

/// Settings for a batch of trials
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    /// Master seed; drawn from OS entropy when `None`
    pub seed: Option<u64>,
    /// Fixed target for every trial; random per trial when `None`
    pub target: Option<Word>,
    pub session: SessionConfig,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(session: SessionConfig) -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed: None,
            target: None,
            session,
        }
    }
}

/// How a single trial ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Solved { guesses: usize },
    /// Candidates ran out before the target was guessed
    Exhausted { guesses: usize },
}

impl TrialOutcome {
    #[must_use]
    pub const fn guesses(self) -> usize {
        match self {
            Self::Solved { guesses } | Self::Exhausted { guesses } => guesses,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Full record of one trial
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub target: Word,
    pub rounds: Vec<(Word, Feedback)>,
    pub outcome: TrialOutcome,
}

/// Aggregate statistics over a batch
#[derive(Debug, Clone)]
pub struct SimulationStatistics {
    pub seed: u64,
    pub total_trials: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    /// Mean guesses over all trials
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Targets that took the most guesses, worst first
    pub hardest_targets: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Play one game against `target`, feeding back classifier output each round
///
/// # Errors
/// - Any error from `GameSession::new` (empty or mixed-length dictionary)
/// - `SolverError::MixedWordLengths` if `target` has the wrong length
pub fn play_trial(
    dictionary: &[Word],
    config: &SessionConfig,
    target: &Word,
    rng: StdRng,
) -> Result<TrialResult, SolverError> {
    let mut session = GameSession::new(dictionary.to_vec(), config.clone(), rng)?;
    if target.len() != session.word_len() {
        return Err(SolverError::MixedWordLengths {
            expected: session.word_len(),
            word: target.text().to_string(),
        });
    }

    debug!("searching for {target}");
    let mut guess = session.start()?.clone();

    let outcome = loop {
        let feedback = Feedback::classify(target, &guess);
        match session.submit_feedback(&feedback) {
            Ok(RoundOutcome::Won { guesses }) => break TrialOutcome::Solved { guesses },
            Ok(RoundOutcome::Continue { next_guess, .. }) => guess = next_guess,
            Err(SolverError::NoCandidateAvailable) => {
                break TrialOutcome::Exhausted {
                    guesses: session.score(),
                };
            }
            Err(e) => return Err(e),
        }
    };

    Ok(TrialResult {
        target: target.clone(),
        rounds: session.history().to_vec(),
        outcome,
    })
}

/// Run `config.rounds` independent trials in parallel
///
/// Each trial gets its own RNG seeded from a master generator, so a batch is
/// reproducible from its seed regardless of scheduling.
///
/// # Errors
/// Returns the first `SolverError` raised by a trial.
pub fn run_simulation(
    dictionary: &[Word],
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SimulationStatistics, SolverError> {
    let start = Instant::now();
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "simulating {} games in {} mode (seed {seed})",
        config.rounds, config.session.mode
    );

    let mut master = rng_from_seed(Some(seed));
    let trial_seeds: Vec<u64> = (0..config.rounds).map(|_| master.random()).collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results = trial_seeds
        .into_par_iter()
        .map(|trial_seed| {
            let mut rng = StdRng::seed_from_u64(trial_seed);
            let target = match &config.target {
                Some(target) => target.clone(),
                None => dictionary
                    .choose(&mut rng)
                    .cloned()
                    .ok_or(SolverError::NoCandidateAvailable)?,
            };
            let result = play_trial(dictionary, &config.session, &target, rng);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();

    Ok(summarize(&results, seed, start.elapsed()))
}

/// Aggregate trial results into batch statistics
///
/// Every trial's guess count is its score, so exhausted trials weigh on the
/// average with the guesses they spent. The distribution and best/worst cases
/// cover solved trials only.
#[must_use]
pub fn summarize(results: &[TrialResult], seed: u64, duration: Duration) -> SimulationStatistics {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let solved_guesses: Vec<usize> = results
        .iter()
        .filter(|r| r.outcome.is_solved())
        .map(|r| r.outcome.guesses())
        .collect();

    for &guesses in &solved_guesses {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let solved = solved_guesses.len();
    let total_guesses: usize = results.iter().map(|r| r.outcome.guesses()).sum();
    let average_guesses = if results.is_empty() {
        0.0
    } else {
        total_guesses as f64 / results.len() as f64
    };

    // Worst count per target
    let mut worst: HashMap<&str, usize> = HashMap::new();
    for r in results.iter().filter(|r| r.outcome.is_solved()) {
        let entry = worst.entry(r.target.text()).or_insert(0);
        *entry = (*entry).max(r.outcome.guesses());
    }
    let mut hardest_targets: Vec<(String, usize)> = worst
        .into_iter()
        .map(|(word, guesses)| (word.to_string(), guesses))
        .collect();
    hardest_targets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_targets.truncate(5);

    SimulationStatistics {
        seed,
        total_trials: results.len(),
        solved,
        failed: results.len() - solved,
        total_guesses,
        average_guesses,
        min_guesses: solved_guesses.iter().copied().min().unwrap_or(0),
        max_guesses: solved_guesses.iter().copied().max().unwrap_or(0),
        distribution,
        hardest_targets,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameMode;
    use crate::wordlists::{WORDS, words_from_slice};

    fn small_dictionary() -> Vec<Word> {
        words_from_slice(&[
            "slate", "crane", "trace", "crate", "irate", "grate", "stone", "shore", "brine",
            "plant",
        ])
    }

    fn config(mode: GameMode, rounds: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            rounds,
            seed: Some(seed),
            target: None,
            session: SessionConfig::new(mode),
        }
    }

    #[test]
    fn trial_solves_every_target_in_every_mode() {
        let dictionary = small_dictionary();
        for mode in [
            GameMode::Native,
            GameMode::ImprovedStart,
            GameMode::ImprovedGuessing,
        ] {
            for (i, target) in dictionary.iter().enumerate() {
                let rng = StdRng::seed_from_u64(i as u64);
                let result =
                    play_trial(&dictionary, &SessionConfig::new(mode), target, rng).unwrap();

                assert!(result.outcome.is_solved(), "{mode} failed on {target}");
                assert_eq!(result.rounds.len(), result.outcome.guesses());
                let (last_guess, last_feedback) = result.rounds.last().unwrap();
                assert_eq!(last_guess, target);
                assert!(last_feedback.is_solved());
            }
        }
    }

    #[test]
    fn trial_feedback_comes_from_classifier() {
        let dictionary = small_dictionary();
        let target = Word::new("stone").unwrap();
        let result = play_trial(
            &dictionary,
            &SessionConfig::new(GameMode::ImprovedGuessing),
            &target,
            StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(result.rounds[0].0.text(), "slate");
        for (guess, feedback) in &result.rounds {
            assert_eq!(feedback, &Feedback::classify(&target, guess));
        }
    }

    #[test]
    fn trial_rejects_target_of_wrong_length() {
        let dictionary = small_dictionary();
        let err = play_trial(
            &dictionary,
            &SessionConfig::default(),
            &Word::new("cat").unwrap(),
            StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::MixedWordLengths { .. }));
    }

    #[test]
    fn target_outside_dictionary_exhausts() {
        let dictionary = small_dictionary();
        let target = Word::new("zesty").unwrap();
        let result = play_trial(
            &dictionary,
            &SessionConfig::new(GameMode::ImprovedGuessing),
            &target,
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert!(!result.outcome.is_solved());
        assert!(result.outcome.guesses() >= 1);
    }

    #[test]
    fn simulation_statistics_are_consistent() {
        let dictionary = small_dictionary();
        let stats = run_simulation(&dictionary, &config(GameMode::ImprovedGuessing, 40, 9), false)
            .unwrap();

        assert_eq!(stats.seed, 9);
        assert_eq!(stats.total_trials, 40);
        assert_eq!(stats.solved + stats.failed, 40);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.distribution.values().sum::<usize>(), stats.solved);
        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
        assert!(stats.hardest_targets.len() <= 5);
    }

    #[test]
    fn simulation_is_reproducible_from_seed() {
        let dictionary = words_from_slice(&WORDS[..200]);
        let cfg = config(GameMode::Native, 25, 1234);

        let a = run_simulation(&dictionary, &cfg, false).unwrap();
        let b = run_simulation(&dictionary, &cfg, false).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.hardest_targets, b.hardest_targets);
    }

    #[test]
    fn simulation_with_fixed_target() {
        let dictionary = small_dictionary();
        let mut cfg = config(GameMode::ImprovedGuessing, 5, 3);
        cfg.target = Some(Word::new("grate").unwrap());

        let stats = run_simulation(&dictionary, &cfg, false).unwrap();

        // frequency mode is deterministic after the fixed opener
        assert_eq!(stats.distribution.len(), 1);
        assert_eq!(stats.hardest_targets, vec![("grate".to_string(), stats.max_guesses)]);
    }

    #[test]
    fn exhausted_trials_count_toward_average() {
        let dictionary = small_dictionary();
        let mut cfg = config(GameMode::ImprovedGuessing, 10, 4);
        cfg.target = Some(Word::new("zesty").unwrap());

        let stats = run_simulation(&dictionary, &cfg, false).unwrap();

        assert_eq!(stats.solved, 0);
        assert_eq!(stats.failed, 10);
        assert!(stats.total_guesses >= 10);
        assert!(stats.average_guesses >= 1.0);
        assert!((stats.average_guesses - stats.total_guesses as f64 / 10.0).abs() < 1e-9);
        assert!(stats.distribution.is_empty());
        assert!(stats.hardest_targets.is_empty());
    }

    #[test]
    fn summarize_mixes_solved_and_exhausted() {
        let trial = |target: &str, outcome| TrialResult {
            target: Word::new(target).unwrap(),
            rounds: Vec::new(),
            outcome,
        };
        let results = vec![
            trial("crate", TrialOutcome::Solved { guesses: 3 }),
            trial("crate", TrialOutcome::Solved { guesses: 1 }),
            trial("crate", TrialOutcome::Solved { guesses: 2 }),
            trial("zesty", TrialOutcome::Exhausted { guesses: 4 }),
        ];

        let stats = summarize(&results, 7, Duration::ZERO);

        assert_eq!(stats.total_trials, 4);
        assert_eq!((stats.solved, stats.failed), (3, 1));
        assert_eq!(stats.total_guesses, 10);
        assert!((stats.average_guesses - 2.5).abs() < 1e-9);
        assert_eq!((stats.min_guesses, stats.max_guesses), (1, 3));
        assert_eq!(stats.hardest_targets, vec![("crate".to_string(), 3)]);
    }

    #[test]
    fn hardest_targets_list_each_word_once() {
        let dictionary = small_dictionary();
        let mut cfg = config(GameMode::Native, 30, 11);
        cfg.target = Some(Word::new("crate").unwrap());

        let stats = run_simulation(&dictionary, &cfg, false).unwrap();

        assert_eq!(
            stats.hardest_targets,
            vec![("crate".to_string(), stats.max_guesses)]
        );
    }

    #[test]
    fn simulation_on_empty_dictionary_fails() {
        let err = run_simulation(&[], &config(GameMode::Native, 3, 1), false).unwrap_err();
        assert_eq!(err, SolverError::NoCandidateAvailable);
    }

    #[test]
    fn zero_rounds_yields_empty_statistics() {
        let dictionary = small_dictionary();
        let stats = run_simulation(&dictionary, &config(GameMode::Native, 0, 1), false).unwrap();
        assert_eq!(stats.total_trials, 0);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
