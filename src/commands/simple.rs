//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI: type a whole word per turn.

use crate::core::WORD_LENGTH;
use crate::dictionary::Dictionary;
use crate::game::{Action, Game, GuessError, MAX_ATTEMPTS, Statistics, Submission};
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use rand::Rng;
use std::io::{self, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    New,
    Answer,
    Stats,
    Quit,
}

fn parse_command(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" => Command::New,
        ":answer" | ":a" => Command::Answer,
        ":stats" | ":s" => Command::Stats,
        word => Command::Guess(word.to_string()),
    }
}

/// Type `word` into a cleared current row and submit it
///
/// Characters that are not letters are dropped, exactly as the TUI drops
/// non-letter key presses. A line with more than five letters is rejected
/// whole rather than cut short.
fn enter_guess<D: Dictionary, R: Rng>(
    game: &mut Game<'_, D, R>,
    word: &str,
) -> Result<Submission, GuessError> {
    if game.status().is_over() {
        return Err(GuessError::GameOver);
    }

    let actions: Vec<Action> = word.chars().filter_map(Action::from_char).collect();
    if actions.len() > WORD_LENGTH {
        let letters: String = word.chars().filter(char::is_ascii_alphabetic).collect();
        return Err(GuessError::UnknownWord(letters.to_ascii_lowercase()));
    }

    while game.backspace() {}
    for action in actions {
        game.apply(action)?;
    }
    game.submit()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<D: Dictionary, R: Rng>(game: &mut Game<'_, D, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordfinder - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: right letter, wrong spot");
    println!("  - Gray: letter not in the word\n");
    println!("Commands: ':new' new game, ':answer' show the word, ':stats', ':quit'\n");

    let mut stats = Statistics::default();

    loop {
        if game.status().is_over() {
            let Some(again) = get_user_input("Play again? (yes/no)")? else {
                break;
            };
            if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                game.new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            break;
        }

        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", game.attempt() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            break;
        };

        match parse_command(&input) {
            Command::Quit => break,
            Command::New => {
                game.new_game();
                println!("\n🔄 New game started!\n");
            }
            Command::Answer => {
                println!(
                    "\n🔎 The word is {}\n",
                    game.reveal_answer().text().to_uppercase()
                );
            }
            Command::Stats => print_statistics(&stats),
            Command::Guess(word) => match enter_guess(game, &word) {
                Ok(submission) => {
                    print_board(game.grid());
                    print_keyboard(&game.letter_knowledge());
                    stats.record(&submission);
                    if submission.status.is_over() {
                        print_outcome(&submission);
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }

    print_statistics(&stats);
    println!("👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{WordList, loader::words_from_slice};
    use crate::game::GameStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordList {
        WordList::new(words_from_slice(&["crane", "slate", "level"])).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(" :NEW "), Command::New);
        assert_eq!(parse_command(":answer"), Command::Answer);
        assert_eq!(parse_command(":stats"), Command::Stats);
        assert_eq!(parse_command("Crane"), Command::Guess("crane".to_string()));
    }

    #[test]
    fn enter_guess_scores_word() {
        let dict = dictionary();
        let mut game = Game::with_secret(&dict, StdRng::seed_from_u64(0), "slate");

        let submission = enter_guess(&mut game, "CRANE").unwrap();

        assert_eq!(submission.guess, "crane");
        assert_eq!(submission.status, GameStatus::InProgress);
        assert_eq!(game.attempt(), 1);
    }

    #[test]
    fn enter_guess_drops_non_letters() {
        let dict = dictionary();
        let mut game = Game::with_secret(&dict, StdRng::seed_from_u64(0), "slate");

        assert_eq!(
            enter_guess(&mut game, "cr4ne"),
            Err(GuessError::IncompleteGuess)
        );
        assert_eq!(game.current_row().unwrap().text(), "crne");
    }

    #[test]
    fn enter_guess_replaces_rejected_letters() {
        let dict = dictionary();
        let mut game = Game::with_secret(&dict, StdRng::seed_from_u64(0), "slate");

        assert!(matches!(
            enter_guess(&mut game, "xyzzy"),
            Err(GuessError::UnknownWord(_))
        ));
        let submission = enter_guess(&mut game, "slate").unwrap();

        assert_eq!(submission.status, GameStatus::Won);
    }

    #[test]
    fn enter_guess_rejects_too_many_letters() {
        let dict = dictionary();
        let mut game = Game::with_secret(&dict, StdRng::seed_from_u64(0), "slate");

        assert_eq!(
            enter_guess(&mut game, "slates"),
            Err(GuessError::UnknownWord("slates".to_string()))
        );
        assert_eq!(game.attempt(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.current_row().unwrap().is_empty());
    }

    #[test]
    fn enter_guess_after_finish_is_rejected() {
        let dict = dictionary();
        let mut game = Game::with_secret(&dict, StdRng::seed_from_u64(0), "slate");
        enter_guess(&mut game, "slate").unwrap();

        assert_eq!(enter_guess(&mut game, "crane"), Err(GuessError::GameOver));
    }
}
