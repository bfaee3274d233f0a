//! Menus and their visit lifecycle
//!
//! A visit runs `Closed → Entering → Open → Exiting → Closed`. Entering
//! stages every bound field into a fresh [`Staging`]; Exiting consults the
//! [`ExitPolicy`], runs the optional exit hook and commits the staged fields
//! in one all-or-nothing store commit.

use crate::entry::Entry;
use crate::error::CmsError;
use crate::staging::Staging;
use crate::store::{ConfigStore, FieldWrite};
use crate::widget::Widget;
use std::fmt;
use tracing::{debug, warn};

/// Index of a menu inside its [`MenuTree`](crate::tree::MenuTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub(crate) usize);

impl MenuId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What initiated an exit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    /// The menu's own Back entry
    Back,
    /// Device-level cancel that unwinds every open menu
    ExitAll,
}

/// Confirm guard deciding whether an exit trigger is accepted
#[derive(Debug, Clone, Copy, Default)]
pub enum ExitPolicy {
    #[default]
    Always,
    /// Only the menu's own Back entry may close it
    OwnBackOnly,
    Custom(fn(ExitTrigger) -> bool),
}

impl ExitPolicy {
    pub fn allows(&self, trigger: ExitTrigger) -> bool {
        match self {
            ExitPolicy::Always => true,
            ExitPolicy::OwnBackOnly => trigger == ExitTrigger::Back,
            ExitPolicy::Custom(guard) => guard(trigger),
        }
    }
}

/// Runs after the bound fields are staged; an error aborts the open
pub type EnterHook = fn(&dyn ConfigStore, &mut Staging) -> Result<(), CmsError>;

/// Runs after the exit guard allowed the exit and before the commit; an error keeps the menu open
pub type ExitHook = fn(ExitTrigger, &Staging) -> Result<(), CmsError>;

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub entries: Vec<Entry>,
    pub on_enter: Option<EnterHook>,
    pub on_exit: Option<ExitHook>,
    pub exit_policy: ExitPolicy,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            on_enter: None,
            on_exit: None,
            exit_policy: ExitPolicy::Always,
        }
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn on_enter(mut self, hook: EnterHook) -> Self {
        self.on_enter = Some(hook);
        self
    }

    pub fn on_exit(mut self, hook: ExitHook) -> Self {
        self.on_exit = Some(hook);
        self
    }

    pub fn exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    /// Index of the designated Back entry
    pub fn back_entry(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| matches!(entry.widget, Widget::Back))
    }

    pub(crate) fn first_selectable(&self) -> Option<usize> {
        self.entries.iter().position(Entry::is_selectable)
    }

    /// Entering: read every bound field into a new staging record
    pub(crate) fn enter(&self, store: &dyn ConfigStore) -> Result<Staging, CmsError> {
        let mut staging = Staging::default();
        for entry in &self.entries {
            let Some(field_ref) = entry.widget.field() else {
                continue;
            };
            let stored = store
                .read(field_ref.field)
                .ok_or_else(|| CmsError::EnterFailed {
                    menu: self.title.clone(),
                    reason: format!("field '{}' is unavailable", field_ref.field),
                })?;
            let shown = field_ref.transform.to_display(stored);
            if entry.is_dynamic() {
                staging.mirror(field_ref.field, shown);
            } else {
                staging.stage(field_ref.field, shown);
            }
        }

        if let Some(hook) = self.on_enter {
            hook(store, &mut staging).map_err(|err| match err {
                CmsError::EnterFailed { .. } => err,
                other => CmsError::EnterFailed {
                    menu: self.title.clone(),
                    reason: other.to_string(),
                },
            })?;
        }

        debug!(menu = %self.title, "Staged menu fields");
        Ok(staging)
    }

    /// Writes produced by committing `staging`, in stored units.
    ///
    /// Only fields the operator changed are written, so a visit without
    /// edits leaves every field bit-identical even under a lossy transform.
    pub fn pending_writes(&self, staging: &Staging) -> Vec<FieldWrite> {
        staging
            .changed()
            .filter_map(|(field, current)| {
                let field_ref = self
                    .entries
                    .iter()
                    .filter(|e| e.is_editable())
                    .filter_map(|e| e.widget.field())
                    .find(|f| f.field == field)?;
                Some(FieldWrite {
                    field,
                    value: field_ref.transform.to_stored(current),
                })
            })
            .collect()
    }

    /// Exiting: guard, hook, then commit. On error the visit stays open and
    /// the store is untouched.
    pub(crate) fn exit(
        &self,
        trigger: ExitTrigger,
        staging: &Staging,
        store: &mut dyn ConfigStore,
    ) -> Result<(), CmsError> {
        if !self.exit_policy.allows(trigger) {
            warn!(menu = %self.title, ?trigger, "Exit rejected by menu guard");
            return Err(CmsError::ExitRejected {
                menu: self.title.clone(),
                trigger,
            });
        }

        if let Some(hook) = self.on_exit {
            hook(trigger, staging)?;
        }

        let writes = self.pending_writes(staging);
        store
            .commit(&writes)
            .map_err(|source| CmsError::CommitFailed {
                menu: self.title.clone(),
                source,
            })?;
        debug!(menu = %self.title, fields = writes.len(), "Committed menu fields");
        Ok(())
    }
}
