//! Display functions for game state and command results

use super::formatters::{create_progress_bar, format_guess, format_keyboard, format_row};
use crate::core::{Feedback, Word};
use crate::game::{Grid, LetterKnowledge, Statistics, Submission};
use colored::Colorize;

/// Print every row of the board that has letters in it
pub fn print_board(grid: &Grid) {
    println!();
    for row in grid.rows().iter().filter(|row| !row.is_empty()) {
        println!("  {}", format_row(row));
    }
    println!();
}

/// Print the keyboard colored by what is known about each letter
pub fn print_keyboard(knowledge: &LetterKnowledge) {
    for line in format_keyboard(knowledge) {
        println!("  {line}");
    }
    println!();
}

/// Print the banner for a submission that ended the game
pub fn print_outcome(submission: &Submission) {
    println!("{}", "═".repeat(40).bright_cyan());
    if let Some(answer) = &submission.answer {
        println!(
            "  {} The word was {}",
            "Out of guesses.".red().bold(),
            answer.to_uppercase().bright_yellow().bold()
        );
    } else {
        println!(
            "  {} Solved in {} {}",
            "Success!".bright_green().bold(),
            submission.attempt.to_string().bright_cyan().bold(),
            if submission.attempt == 1 {
                "guess"
            } else {
                "guesses"
            }
        );
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the result of scoring one guess against a secret
pub fn print_score_result(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", format_guess(guess, feedback));
    println!("  {}", feedback.to_emoji());
    println!(
        "\n  {} hit, {} present",
        feedback.count_hits().to_string().green(),
        feedback.count_presents().to_string().yellow()
    );
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:      {}", stats.total_games);
    println!("   Win rate:    {:.0}%", stats.win_rate());
    println!(
        "   Streak:      {} (best {})",
        stats.current_streak, stats.max_streak
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
