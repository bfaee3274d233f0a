//! Terminal setup and cleanup for Ratatui TUI

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize terminal for TUI mode
pub fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Wait up to `timeout` for a key press; `None` means the UI tick elapsed
pub fn poll_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Navigation action from key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Increase,
    Decrease,
    Select,
    Back,
    ExitAll,   // q - leave every menu, committing on the way out
    ForceQuit, // Ctrl+Q - quit without committing open menus
    None,
}

impl From<KeyEvent> for NavAction {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            return NavAction::ForceQuit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => NavAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavAction::Down,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => NavAction::Increase,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => NavAction::Decrease,
            KeyCode::Enter | KeyCode::Char(' ') => NavAction::Select,
            KeyCode::Esc | KeyCode::Backspace => NavAction::Back,
            KeyCode::Char('q') => NavAction::ExitAll,
            _ => NavAction::None,
        }
    }
}
