//! Navigation stack
//!
//! Tracks the chain of open menus. Each frame owns the staging record of its
//! visit; only the top frame is open for editing. This is also the surface
//! the input/render layer talks to.

use crate::entry::{Entry, EntryAction};
use crate::error::CmsError;
use crate::menu::{ExitTrigger, Menu, MenuId};
use crate::staging::Staging;
use crate::store::ConfigStore;
use crate::tree::MenuTree;
use crate::widget::Widget;
use tracing::{debug, info};

/// Result of activating the highlighted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Opened(MenuId),
    Closed(MenuId),
    Invoked,
    Ignored,
}

#[derive(Debug)]
struct Frame {
    menu: MenuId,
    staging: Staging,
    cursor: Option<usize>,
}

#[derive(Debug)]
pub struct NavigationStack<'t> {
    tree: &'t MenuTree,
    frames: Vec<Frame>,
}

impl<'t> NavigationStack<'t> {
    pub fn new(tree: &'t MenuTree) -> Self {
        Self {
            tree,
            frames: Vec::new(),
        }
    }

    fn menu(&self, id: MenuId) -> Result<&'t Menu, CmsError> {
        self.tree.get(id).ok_or(CmsError::UnknownMenu { id: id.0 })
    }

    /// Enter `id` and push it. On failure nothing is pushed.
    pub fn open(&mut self, id: MenuId, store: &dyn ConfigStore) -> Result<(), CmsError> {
        let menu = self.menu(id)?;
        let staging = menu.enter(store)?;
        self.frames.push(Frame {
            menu: id,
            staging,
            cursor: menu.first_selectable(),
        });
        info!(menu = %menu.title, depth = self.frames.len(), "Opened menu");
        Ok(())
    }

    pub fn open_root(&mut self, store: &dyn ConfigStore) -> Result<(), CmsError> {
        self.open(self.tree.root(), store)
    }

    /// Exit the current menu as if its own Back entry was selected.
    ///
    /// Returns the closed menu. The parent resumes with its staging intact.
    pub fn request_back(&mut self, store: &mut dyn ConfigStore) -> Result<MenuId, CmsError> {
        self.exit_current(ExitTrigger::Back, store)
    }

    /// Unwind every open menu, top first.
    ///
    /// Stops at the first menu that refuses or fails to commit; that menu
    /// and its ancestors stay open, menus above it stay closed.
    pub fn request_exit_all(&mut self, store: &mut dyn ConfigStore) -> Result<(), CmsError> {
        if self.frames.is_empty() {
            return Err(CmsError::NoMenuOpen);
        }
        while !self.frames.is_empty() {
            self.exit_current(ExitTrigger::ExitAll, store)?;
        }
        Ok(())
    }

    fn exit_current(
        &mut self,
        trigger: ExitTrigger,
        store: &mut dyn ConfigStore,
    ) -> Result<MenuId, CmsError> {
        let frame = self.frames.last().ok_or(CmsError::NoMenuOpen)?;
        let menu = self.menu(frame.menu)?;
        menu.exit(trigger, &frame.staging, store)?;

        let id = frame.menu;
        self.frames.pop();
        info!(menu = %menu.title, ?trigger, depth = self.frames.len(), "Closed menu");
        Ok(id)
    }

    pub fn current_menu(&self) -> Option<MenuId> {
        self.frames.last().map(|f| f.menu)
    }

    pub fn current_title(&self) -> Option<&'t str> {
        let id = self.current_menu()?;
        self.tree.get(id).map(|m| m.title.as_str())
    }

    /// Entries of the open menu, empty when nothing is open
    pub fn current_entries(&self) -> &'t [Entry] {
        self.current_menu()
            .and_then(|id| self.tree.get(id))
            .map(|m| m.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_open(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn is_menu_open(&self, id: MenuId) -> bool {
        self.frames.iter().any(|f| f.menu == id)
    }

    /// Titles from root to the open menu
    pub fn breadcrumbs(&self) -> Vec<&'t str> {
        self.frames
            .iter()
            .filter_map(|f| self.tree.get(f.menu))
            .map(|m| m.title.as_str())
            .collect()
    }

    /// Staging of the open visit
    pub fn staging(&self) -> Option<&Staging> {
        self.frames.last().map(|f| &f.staging)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.frames.last().and_then(|f| f.cursor)
    }

    /// Move the cursor to `index`. Ignored for labels and out-of-range indices.
    pub fn highlight(&mut self, index: usize) -> bool {
        let entries = self.current_entries();
        let Some(frame) = self.frames.last_mut() else {
            return false;
        };
        match entries.get(index) {
            Some(entry) if entry.is_selectable() => {
                frame.cursor = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Next selectable entry, wrapping around
    pub fn highlight_next(&mut self) {
        self.step_cursor(1);
    }

    /// Previous selectable entry, wrapping around
    pub fn highlight_previous(&mut self) {
        self.step_cursor(-1);
    }

    fn step_cursor(&mut self, direction: isize) {
        let entries = self.current_entries();
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        let len = entries.len() as isize;
        if len == 0 {
            return;
        }
        let start = frame.cursor.map(|c| c as isize).unwrap_or(-direction);
        for offset in 1..=len {
            let candidate = (start + direction * offset).rem_euclid(len) as usize;
            if entries[candidate].is_selectable() {
                frame.cursor = Some(candidate);
                return;
            }
        }
    }

    /// Apply `delta` clicks to the highlighted entry's staged value.
    ///
    /// Returns the new value, or `None` when the entry is not editable.
    pub fn edit_highlighted(&mut self, delta: i32) -> Option<i32> {
        let entries = self.current_entries();
        let frame = self.frames.last_mut()?;
        let entry = entries.get(frame.cursor?)?;
        if !entry.is_editable() {
            return None;
        }
        let field = entry.widget.field()?.field;
        let current = frame.staging.value(field)?;
        let next = entry.widget.edit(current, delta);
        frame.staging.set(field, next);
        debug!(entry = %entry.label, from = current, to = next, "Edited staged value");
        Some(next)
    }

    /// Navigate into a submenu, run a callback, or go back, depending on the
    /// highlighted entry.
    pub fn activate_highlighted(
        &mut self,
        store: &mut dyn ConfigStore,
    ) -> Result<Activation, CmsError> {
        let entries = self.current_entries();
        let Some(entry) = self.highlighted().and_then(|i| entries.get(i)) else {
            return Ok(Activation::Ignored);
        };

        if matches!(entry.widget, Widget::Back) {
            return self.request_back(store).map(Activation::Closed);
        }

        match entry.action {
            Some(EntryAction::Submenu(child)) => {
                self.open(child, store)?;
                Ok(Activation::Opened(child))
            }
            Some(EntryAction::Callback(callback)) => {
                let frame = self.frames.last_mut().ok_or(CmsError::NoMenuOpen)?;
                callback(&mut frame.staging).map_err(|err| match err {
                    CmsError::ActionFailed { .. } => err,
                    other => CmsError::ActionFailed {
                        entry: entry.label.clone(),
                        reason: other.to_string(),
                    },
                })?;
                debug!(entry = %entry.label, "Invoked entry callback");
                Ok(Activation::Invoked)
            }
            None => Ok(Activation::Ignored),
        }
    }

    /// Re-read the live source of every dynamic entry in the open menu
    pub fn dynamic_refresh(&mut self, store: &dyn ConfigStore) {
        let entries = self.current_entries();
        let Some(frame) = self.frames.last_mut() else {
            return;
        };
        for entry in entries.iter().filter(|e| e.is_dynamic()) {
            if let Some(field_ref) = entry.widget.field() {
                if let Some(stored) = store.read(field_ref.field) {
                    frame
                        .staging
                        .mirror(field_ref.field, field_ref.transform.to_display(stored));
                }
            }
        }
    }

    /// Current value of entry `index` of the open menu, in display units
    pub fn value(&self, index: usize) -> Option<i32> {
        let entry = self.current_entries().get(index)?;
        let field = entry.widget.field()?.field;
        self.staging()?.value(field)
    }

    /// Rendered value of entry `index` of the open menu
    pub fn display_value(&self, index: usize) -> Option<String> {
        let entry = self.current_entries().get(index)?;
        entry.widget.display(self.value(index)?)
    }
}
