//! TUI Theme - OSD-like palette
//!
//! Bright text on a dark background, amber for the cursor row, muted
//! grey for read-only and live values.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Selected item background
pub const SELECTED_BG: Color = Color::Rgb(50, 60, 80);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Breadcrumb line
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Editable value
pub fn value() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// Live (dynamic) or read-only value
pub fn live_value() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Section label rows
pub fn label() -> Style {
    Style::default().fg(ACCENT)
}

/// Highlighted/selected item style
pub fn selected() -> Style {
    Style::default()
        .bg(SELECTED_BG)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Status line for rejected or failed actions
pub fn error() -> Style {
    Style::default().fg(ERROR)
}
