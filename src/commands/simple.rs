//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is typed into the board key by
//! key and submitted, then the clock is run until every animation and alert
//! has finished.

use crate::game::{Game, GameConfig, GameEvent, InputEvent, Submission};
use crate::interactive::{GameMode, Statistics};
use crate::output::formatters::{colored_keyboard, colored_row};
use crate::output::{print_game_result, print_statistics};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(source: &WordSource, mode: GameMode, config: GameConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Line Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    match mode {
        GameMode::Daily { day } => println!("Daily puzzle #{day}"),
        GameMode::Practice => println!("Practice puzzle"),
    }
    println!("Type a five-letter guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a random practice game\n");

    let mut game = match mode {
        GameMode::Daily { day } => Game::for_day(source, day, config),
        GameMode::Practice => Game::new(source, source.random_target().clone(), config),
    };
    let mut stats = Statistics::new(game.config().max_attempts);

    loop {
        let prompt = format!(
            "Guess {}/{}",
            game.attempts() + 1,
            game.board().row_count()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.new_game(source.random_target().clone());
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if input.chars().count() > crate::core::WORD_LENGTH {
            println!("{}", "Too many letters".red());
            continue;
        }

        let (submission, messages) = play_line(&mut game, &input);
        if let Submission::Revealing(feedback) = submission
            && let Some((guess, _)) = game.history().last()
        {
            println!("\n  {}\n", colored_row(guess, &feedback));
            for line in colored_keyboard(game.keys()) {
                println!("  {line}");
            }
            println!();
        }
        for message in messages {
            println!("{}", message.bright_white().bold());
        }

        if game.outcome().is_over() {
            stats.record(game.outcome(), game.attempts());
            print_game_result(&game);
            print_statistics(&stats);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.new_game(source.random_target().clone());
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Type one line into the current row, submit it and let it play out
///
/// Returns how the submission went plus every notification raised on the way.
pub fn play_line(game: &mut Game<'_>, line: &str) -> (Submission, Vec<String>) {
    for _ in 0..crate::core::WORD_LENGTH {
        game.dispatch(InputEvent::Backspace);
    }
    for c in line.chars() {
        game.dispatch(InputEvent::Char(c));
    }

    let submission = game.submit_guess();
    game.run_until_idle();

    let messages = game
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::Notify { message, .. } => Some(message),
            _ => None,
        })
        .collect();

    (submission, messages)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameOutcome, GuessError};
    use crate::wordlists::loader::words_from_slice;

    fn source() -> WordSource {
        WordSource::new(
            words_from_slice(&["plane"]),
            words_from_slice(&["crane", "plant"]),
        )
        .unwrap()
    }

    #[test]
    fn short_line_is_rejected_and_row_kept() {
        let source = source();
        let mut game = Game::for_day(&source, 0, GameConfig::default());

        let (submission, messages) = play_line(&mut game, "pla");
        assert_eq!(submission, Submission::Rejected(GuessError::NotEnoughLetters));
        assert_eq!(messages, vec!["Not enough letters".to_string()]);
        assert_eq!(game.attempts(), 0);
        assert!(game.is_listening());
    }

    #[test]
    fn retyping_replaces_a_rejected_row() {
        let source = source();
        let mut game = Game::for_day(&source, 0, GameConfig::default());

        let (submission, messages) = play_line(&mut game, "zzzzz");
        assert_eq!(submission, Submission::Rejected(GuessError::NotInWordList));
        assert_eq!(messages, vec!["Not in word list".to_string()]);

        let (submission, _) = play_line(&mut game, "crane");
        assert!(matches!(submission, Submission::Revealing(_)));
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.history()[0].0.text(), "crane");
    }

    #[test]
    fn winning_line_reports_win() {
        let source = source();
        let mut game = Game::for_day(&source, 0, GameConfig::default());

        let (_, messages) = play_line(&mut game, "PLANE");
        assert_eq!(game.outcome(), GameOutcome::Won);
        assert_eq!(messages, vec!["You win!".to_string()]);
        assert!(game.is_idle());
    }
}
