//! Menu session loop: input → navigation stack → render

use crate::terminal::{NavAction, Tui, poll_key};
use crate::view;
use cms_core::{Activation, CmsError, ConfigStore, MenuTree, NavigationStack};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info};

/// UI tick; dynamic entries refresh at this rate
const TICK: Duration = Duration::from_millis(50);

/// How a menu session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every menu exited normally and committed
    Closed,
    /// Force quit; open menus were dropped without committing
    Discarded,
}

/// Run one session from the root menu until it closes
pub fn run_session(
    terminal: &mut Tui,
    tree: &MenuTree,
    store: &mut dyn ConfigStore,
) -> Result<SessionEnd, Box<dyn Error>> {
    let mut nav = NavigationStack::new(tree);
    nav.open_root(store)?;
    let mut status: Option<String> = None;

    let end = loop {
        nav.dynamic_refresh(store);
        terminal.draw(|frame| view::render(frame, &nav, status.as_deref()))?;

        let Some(key) = poll_key(TICK)? else {
            continue;
        };
        let action = NavAction::from(key);
        if action == NavAction::ForceQuit {
            info!(depth = nav.depth(), "Session discarded");
            break SessionEnd::Discarded;
        }

        status = apply(&mut nav, store, action).err().map(|err| err.to_string());
        if !nav.is_open() {
            break SessionEnd::Closed;
        }
    };
    Ok(end)
}

/// Apply one navigation action. Errors leave the stack unchanged.
pub fn apply(
    nav: &mut NavigationStack<'_>,
    store: &mut dyn ConfigStore,
    action: NavAction,
) -> Result<(), CmsError> {
    match action {
        NavAction::Up => nav.highlight_previous(),
        NavAction::Down => nav.highlight_next(),
        NavAction::Increase => {
            nav.edit_highlighted(1);
        }
        NavAction::Decrease => {
            nav.edit_highlighted(-1);
        }
        NavAction::Select => {
            let activation = nav.activate_highlighted(store)?;
            if activation != Activation::Ignored {
                debug!(?activation, "Activated entry");
            }
        }
        NavAction::Back => {
            nav.request_back(store)?;
        }
        NavAction::ExitAll => nav.request_exit_all(store)?,
        NavAction::ForceQuit | NavAction::None => {}
    }
    Ok(())
}
