//! TUI application state and logic

use crate::dictionary::WordList;
use crate::game::{Action, Event as GameEvent, Game, GameStatus, GuessError, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, WordList, StdRng>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing guesses
    Playing,
    /// Game won or lost; waiting for a restart or quit
    Outcome,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a, WordList, StdRng>) -> Self {
        Self {
            game,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden 5-letter word in 6 tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Backspace to erase.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        }
    }

    /// Translate a key press into a game action for the current mode
    #[must_use]
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match self.input_mode {
            InputMode::Outcome => match key.code {
                KeyCode::Enter | KeyCode::Tab => Some(Action::Restart),
                KeyCode::Char('?') => Some(Action::Reveal),
                // In outcome mode, ignore other keys
                _ => None,
            },
            InputMode::Playing => match key.code {
                KeyCode::Tab => Some(Action::Restart),
                KeyCode::Char('?') => Some(Action::Reveal),
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Backspace => Some(Action::Delete),
                KeyCode::Char(c) => Action::from_char(c),
                _ => None,
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {
                if let Some(action) = self.action_for(key) {
                    self.dispatch(action);
                }
            }
        }
    }

    /// Apply an action to the game and turn the result into messages
    pub fn dispatch(&mut self, action: Action) {
        match self.game.apply(action) {
            Ok(GameEvent::Ignored | GameEvent::Edited) | Err(GuessError::GameOver) => {}
            Ok(GameEvent::Submitted(submission)) => {
                self.stats.record(&submission);
                match submission.status {
                    GameStatus::InProgress => {}
                    GameStatus::Won => {
                        self.input_mode = InputMode::Outcome;

                        let celebration = match submission.attempt {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press Enter for a new game or Esc to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.input_mode = InputMode::Outcome;
                        let answer = submission.answer.unwrap_or_default().to_uppercase();
                        self.add_message(
                            &format!("Out of guesses! The word was {answer}"),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press Enter for a new game or Esc to quit.",
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Ok(GameEvent::Restarted) => {
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message("New game started! Good luck.", MessageStyle::Info);
            }
            Ok(GameEvent::Revealed(word)) => {
                debug!("answer revealed on request");
                self.add_message(
                    &format!("The word is {}", word.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;

    fn dictionary() -> WordList {
        WordList::new(words_from_slice(&[
            "crane", "slate", "robot", "floor", "irate", "audio", "level",
        ]))
        .unwrap()
    }

    fn app<'a>(dict: &'a WordList, secret: &str) -> App<'a> {
        App::new(Game::with_secret(dict, StdRng::seed_from_u64(0), secret))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn last_message<'a>(app: &'a App<'_>) -> &'a str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn letters_fill_current_row() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.game.current_row().unwrap().text(), "ca");
    }

    #[test]
    fn short_guess_shows_notice() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");

        type_word(&mut app, "cra");

        assert_eq!(last_message(&app), "Not enough letters");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.game.attempt(), 0);
    }

    #[test]
    fn unknown_word_shows_notice() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");

        type_word(&mut app, "xyzzy");

        assert_eq!(last_message(&app), "Not in word list: XYZZY");
    }

    #[test]
    fn win_enters_outcome_mode_and_blocks_typing() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");

        type_word(&mut app, "slate");

        assert_eq!(app.input_mode, InputMode::Outcome);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.game.grid().rows()[1].text(), "");
    }

    #[test]
    fn loss_reveals_answer() {
        let dict = dictionary();
        let mut app = app(&dict, "level");

        for word in ["crane", "slate", "robot", "floor", "irate", "audio"] {
            type_word(&mut app, word);
        }

        assert_eq!(app.input_mode, InputMode::Outcome);
        assert_eq!(app.game.status(), GameStatus::Lost);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Out of guesses! The word was LEVEL")
        );
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn enter_after_outcome_restarts() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");
        type_word(&mut app, "slate");

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert!(app.game.grid().is_blank());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn tab_restarts_mid_game() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");
        type_word(&mut app, "crane");

        press(&mut app, KeyCode::Tab);

        assert_eq!(app.game.attempt(), 0);
        assert!(app.game.grid().is_blank());
    }

    #[test]
    fn question_mark_reveals_answer() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");

        press(&mut app, KeyCode::Char('?'));

        assert_eq!(last_message(&app), "The word is SLATE");
        assert_eq!(app.game.status(), GameStatus::InProgress);
    }

    #[test]
    fn question_mark_reveals_after_outcome() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");
        type_word(&mut app, "slate");

        press(&mut app, KeyCode::Char('?'));

        assert_eq!(last_message(&app), "The word is SLATE");
        assert_eq!(app.input_mode, InputMode::Outcome);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT));
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.game.current_row().unwrap().text(), "r");
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app2 = App::new(Game::with_secret(&dict, StdRng::seed_from_u64(0), "slate"));
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
        assert!(app2.game.current_row().unwrap().is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let dict = dictionary();
        let mut app = app(&dict, "slate");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
