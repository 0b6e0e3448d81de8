//! Shared styles and the loading spinner.

use ratatui::style::{Color, Modifier, Style};

const SPINNER_FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner glyph for the given animation frame (0-7).
pub fn spinner_char(frame: u8) -> char {
    SPINNER_FRAMES[(frame % 8) as usize]
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn row_highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Style applied to search term matches inside log rows.
pub fn search_match() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn connected() -> Style {
    Style::default().fg(Color::Green)
}

pub fn disconnected() -> Style {
    Style::default().fg(Color::Red)
}
