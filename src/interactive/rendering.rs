//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterStatus;
use crate::game::{GameStatus, LetterKnowledge, MAX_ATTEMPTS, Row};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Style for a tile with the given status
fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Hit => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Miss => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Empty => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDFINDER - Guess the word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_line(row: &Row, is_current: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells().len() * 2);
    for cell in row.cells() {
        let (text, style) = match cell.letter() {
            Some(c) => (
                format!(" {} ", c.to_ascii_uppercase()),
                status_style(cell.status()),
            ),
            None if is_current => (" _ ".to_string(), Style::default().fg(Color::Yellow)),
            None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let current = app.game.attempt();
    let mut lines = vec![Line::from("")];
    for (i, row) in app.game.grid().rows().iter().enumerate() {
        let is_current = i == current && !app.game.status().is_over();
        lines.push(board_line(row, is_current));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, &app.game.letter_knowledge(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, knowledge: &LetterKnowledge, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            status_style(knowledge.get(c)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let typed = app
        .game
        .current_row()
        .map(|row| row.text().to_uppercase())
        .unwrap_or_default();

    let (title, content, color) = match app.input_mode {
        InputMode::Outcome if app.game.status() == GameStatus::Won => (
            " CONGRATULATIONS! | Enter for new game or Esc to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Outcome => (
            " GAME OVER | Enter for new game or Esc to quit ",
            String::new(),
            Color::Red,
        ),
        InputMode::Playing => (
            " Type your guess | Enter to submit, Backspace to erase ",
            typed,
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let progress_text = match app.game.status() {
        GameStatus::InProgress => {
            format!("Guess: {}/{MAX_ATTEMPTS}", app.game.attempt() + 1)
        }
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    let progress = Paragraph::new(progress_text).alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!("Streak: {}", app.stats.current_streak);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: Restart | ?: Answer")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
