//! Wordle Guesser - CLI
//!
//! Suggests guesses for a Wordle-style game from exact/present/absent feedback,
//! or plays against itself to measure the average number of guesses.

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, warn};
use rand::seq::IndexedRandom;
use std::io;
use std::path::{Path, PathBuf};
use wordle_guesser::{
    commands::{
        DEFAULT_ROUNDS, InteractiveOutcome, SimulationConfig, play_trial, run_interactive,
        run_simulation,
    },
    core::Word,
    output::{mode_banner, print_simulation_statistics, print_trial_result},
    solver::{GameMode, GameSession, SessionConfig, rng_from_seed},
    wordlists::{WORDS, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Wordle guessing assistant using constraint filtering and letter frequencies",
    version
)]
struct Cli {
    /// Mode: native, improvedStart or improvedGuessing
    #[arg(
        short = 'm',
        long = "mode",
        alias = "m",
        value_enum,
        default_value_t = GameMode::ImprovedGuessing
    )]
    mode: GameMode,

    /// Play against randomly chosen targets instead of asking for feedback
    #[arg(long)]
    simulation: bool,

    /// Suppress console narration
    #[arg(long)]
    silent: bool,

    /// Word file, one word per line (default: built-in list)
    #[arg(short = 'w', long)]
    words: Option<PathBuf>,

    /// Number of games to simulate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed simulation target instead of a random one
    #[arg(long)]
    target: Option<String>,

    /// Opening word for the improved modes (default: slate)
    #[arg(long)]
    opener: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8, silent: bool) {
    let level = if silent {
        LevelFilter::Off
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Load the dictionary from `path`, or the built-in list
fn load_dictionary(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
        None => Ok(words_from_slice(WORDS)),
    }
}

fn parse_word(text: &str, what: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("invalid {what} {text:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.silent);

    let dictionary = load_dictionary(cli.words.as_deref())?;

    let mut session_config = SessionConfig::new(cli.mode);
    if let Some(opener) = &cli.opener {
        session_config = session_config.with_opener(parse_word(opener, "opener")?);
    }

    // Printed even when silent so batch output names its mode
    println!("{}", mode_banner(cli.mode));

    if cli.simulation {
        run_simulation_command(&cli, &dictionary, session_config)
    } else {
        run_interactive_command(&cli, dictionary, session_config)
    }
}

fn run_simulation_command(cli: &Cli, dictionary: &[Word], session: SessionConfig) -> Result<()> {
    let target = cli
        .target
        .as_deref()
        .map(|t| parse_word(t, "target"))
        .transpose()?;

    if let Some(target) = &target
        && !dictionary.contains(target)
    {
        warn!("target {target} is not in the dictionary and cannot be found");
    }

    // A single game is shown turn by turn
    if cli.rounds == 1 {
        let mut rng = rng_from_seed(cli.seed);
        let target = match target {
            Some(target) => target,
            None => dictionary
                .choose(&mut rng)
                .cloned()
                .context("dictionary is empty")?,
        };
        let result = play_trial(dictionary, &session, &target, rng)?;
        if cli.silent {
            println!("Average score in 1 rounds: {}", result.outcome.guesses());
        } else {
            print_trial_result(&result);
        }
        return Ok(());
    }

    let mode = session.mode;
    let config = SimulationConfig {
        rounds: cli.rounds,
        seed: cli.seed,
        target,
        session,
    };

    let stats = run_simulation(dictionary, &config, !cli.silent)?;
    print_simulation_statistics(&stats, mode, cli.silent);
    Ok(())
}

fn run_interactive_command(cli: &Cli, dictionary: Vec<Word>, config: SessionConfig) -> Result<()> {
    let mut session = GameSession::new(dictionary, config, rng_from_seed(cli.seed))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let outcome = run_interactive(&mut session, &mut input, &mut output, cli.silent)?;
    if let InteractiveOutcome::Exhausted { guesses } = outcome {
        anyhow::bail!("no candidate words left after {guesses} guesses; check the feedback entered");
    }
    Ok(())
}
