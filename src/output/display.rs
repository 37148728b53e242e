//! Display functions for finished games

use super::formatters::{create_progress_bar, share_grid};
use crate::game::{Game, GameOutcome};
use crate::interactive::Statistics;
use colored::Colorize;

/// Print the result and share grid of a finished game
pub fn print_game_result(game: &Game<'_>) {
    let rows = game.board().row_count();
    let score = match game.outcome() {
        GameOutcome::Won => game.attempts().to_string(),
        GameOutcome::Lost | GameOutcome::InProgress => "X".to_string(),
    };

    println!("\n{}", "─".repeat(40).cyan());
    match game.revealed_target() {
        Some(target) if game.outcome() == GameOutcome::Won => {
            println!(
                "{} {}",
                "✅ Solved:".green().bold(),
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
        Some(target) => {
            println!(
                "{} {}",
                "❌ The word was".red().bold(),
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
        None => println!("Game still in progress"),
    }
    println!("{}", "─".repeat(40).cyan());

    println!("\n{score}/{rows}\n{}\n", share_grid(&game.history()));
}

/// Print win rate and guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("{}", "Statistics".bright_cyan().bold());
    println!(
        "   Played: {}   Win rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0) as f64;
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max, 30);
        println!("   {attempts}: {} {count}", bar.green());
    }
    println!();
}
