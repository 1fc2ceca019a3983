//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{SimulationStatistics, TrialOutcome, TrialResult};
use crate::solver::GameMode;
use colored::Colorize;

/// Print a single trial turn by turn
pub fn print_trial_result(result: &TrialResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Searching: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, feedback)) in result.rounds.iter().enumerate() {
        println!(
            "Turn {}: {} {}  [{feedback}]",
            i + 1,
            guess.text().to_uppercase(),
            feedback_to_emoji(feedback)
        );
    }

    println!();
    match result.outcome {
        TrialOutcome::Solved { guesses } => println!(
            "{}",
            format!(
                "✅ Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        TrialOutcome::Exhausted { guesses } => println!(
            "{}",
            format!("❌ No candidates left after {guesses} guesses")
                .red()
                .bold()
        ),
    }
}

/// Print batch statistics
///
/// In silent mode only the average line is printed.
pub fn print_simulation_statistics(stats: &SimulationStatistics, mode: GameMode, silent: bool) {
    if silent {
        println!(
            "Average score in {} rounds: {:.4}",
            stats.total_trials, stats.average_guesses
        );
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Mode:             {mode}");
    println!("   Seed:             {}", stats.seed);
    println!("   Games played:     {}", stats.total_trials);
    println!(
        "   Average guesses:  {}",
        format!("{:.4}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    if stats.solved > 0 {
        println!(
            "   Best case:        {}",
            format!("{}", stats.min_guesses).green()
        );
        println!(
            "   Worst case:       {}",
            format!("{}", stats.max_guesses).yellow()
        );
    }
    if stats.failed > 0 {
        println!(
            "   Unsolved:         {}",
            format!("{}", stats.failed).red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if !stats.distribution.is_empty() {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        let max_count = stats.distribution.values().copied().max().unwrap_or(1);
        let mut guesses: Vec<usize> = stats.distribution.keys().copied().collect();
        guesses.sort_unstable();

        for g in guesses {
            let count = stats.distribution.get(&g).copied().unwrap_or(0);
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {g:2} guesses: {} {count:5} ({percentage:5.1}%)", bar.green());
        }
    }

    if !stats.hardest_targets.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in &stats.hardest_targets {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    println!(
        "\nAverage score in {} rounds: {:.4}",
        stats.total_trials, stats.average_guesses
    );
}
