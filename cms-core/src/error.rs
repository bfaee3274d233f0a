use crate::menu::ExitTrigger;
use crate::store::StoreError;
use thiserror::Error;

/// Errors raised by menu construction and navigation.
///
/// Edits are never errors: out-of-range values are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CmsError {
    #[error("menu '{menu}' could not be entered: {reason}")]
    EnterFailed { menu: String, reason: String },

    #[error("menu '{menu}' refused exit via {trigger:?}")]
    ExitRejected { menu: String, trigger: ExitTrigger },

    #[error("menu '{menu}' could not commit its changes: {source}")]
    CommitFailed {
        menu: String,
        #[source]
        source: StoreError,
    },

    #[error("entry '{entry}' action failed: {reason}")]
    ActionFailed { entry: String, reason: String },

    #[error("no menu with id {id}")]
    UnknownMenu { id: usize },

    #[error("no menu is open")]
    NoMenuOpen,

    #[error("menu id {id} was reserved but never defined")]
    UndefinedMenu { id: usize },

    #[error("menu '{menu}' is reachable from itself")]
    CyclicMenu { menu: String },

    #[error("entry '{entry}' in menu '{menu}' references a missing submenu")]
    DanglingSubmenu { menu: String, entry: String },

    #[error("entry '{entry}' in menu '{menu}' has invalid bounds")]
    InvalidBounds { menu: String, entry: String },

    #[error("entry '{entry}' in menu '{menu}' has {names} names for max index {max_index}")]
    EnumTableTooShort {
        menu: String,
        entry: String,
        max_index: usize,
        names: usize,
    },

    #[error("entry '{entry}' in menu '{menu}' has a zero scale transform")]
    InvalidTransform { menu: String, entry: String },

    #[error("entry '{entry}' in menu '{menu}' binds field '{field}' already bound by another entry")]
    DuplicateField {
        menu: String,
        entry: String,
        field: String,
    },
}
