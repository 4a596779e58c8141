//! Interactive terminal UI
//!
//! Full-screen game built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use rendering::ui;
