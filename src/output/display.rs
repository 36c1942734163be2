//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, keyboard_lines};
use crate::commands::{BenchmarkResult, CheckResult, HintResult};
use crate::core::{FeedbackRow, KeyboardAggregate, MAX_TURNS, Word};
use crate::game::Statistics;
use colored::Colorize;

/// Print the guesses so far as tile rows
pub fn print_board(history: &[(Word, FeedbackRow)]) {
    println!();
    for (guess, row) in history {
        println!("  {}", colored_tiles(guess, row));
    }
    println!();
}

/// Print the keyboard aggregate
pub fn print_keyboard(keys: &KeyboardAggregate) {
    for line in keyboard_lines(keys) {
        println!("  {line}");
    }
    println!();
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:  {}", stats.games);
    println!("   Won:     {}", stats.wins);
    println!("   Lost:    {}", stats.losses());
    println!("   Win %:   {:.0}", stats.win_percentage());
    print_distribution(&stats.guess_distribution, stats.wins);
}

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", colored_tiles(&result.guess, &result.row));
    println!("  {}  ({})", result.row.to_emoji(), result.row);
}

/// Print the result of a hint query
pub fn print_hint_result(result: &HintResult) {
    if !result.history.is_empty() {
        print_board(&result.history);
    }

    println!(
        "📊 {} candidates remain",
        result.candidates_remaining.to_string().bright_yellow()
    );

    if result.suggestions.is_empty() {
        println!("{}", "No suggestions (constraints too tight).".yellow());
        return;
    }

    println!("\n💡 {}", "Suggestions:".bright_cyan().bold());
    for (i, word) in result.suggestions.iter().enumerate() {
        println!("   {}. {}", i + 1, word.text().to_uppercase().bright_white().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HINT BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average turns:    {:.2}", result.average_turns);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.won);

    if !result.hardest.is_empty() {
        println!("\n😓 {}", "Missed words:".bright_red().bold());
        for outcome in &result.hardest {
            println!(
                "   {} ← {}",
                outcome.secret.to_uppercase().red(),
                outcome.guesses.join(" ").to_uppercase()
            );
        }
    }
}

fn print_distribution(distribution: &[usize; MAX_TURNS], wins: usize) {
    for (i, &count) in distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, wins.max(1) as f64, 30);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}
