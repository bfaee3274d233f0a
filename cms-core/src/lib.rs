//! # cms-core
//!
//! Staged, type-safe configuration menus for an embedded control device.
//!
//! ## Architecture
//!
//! - [`widget`] - closed set of value widgets with clamp/edit/display rules
//! - [`entry`] - one menu line: label, navigation action or bound widget
//! - [`menu`] - entries plus enter/exit hooks and an exit policy
//! - [`tree`] - static menu topology, validated once at startup
//! - [`navigation`] - stack of open menus; each frame owns its staging
//! - [`store`] - Config Store boundary and an in-memory implementation
//!
//! The store is only ever mutated by a confirmed menu exit.

pub mod config;
pub mod entry;
pub mod error;
pub mod menu;
pub mod menus;
pub mod navigation;
pub mod staging;
pub mod store;
pub mod tree;
pub mod widget;

pub use config::{CmsConfig, ConfigError, Features};
pub use entry::{Entry, EntryAction, EntryCallback, EntryFlags};
pub use error::CmsError;
pub use menu::{EnterHook, ExitHook, ExitPolicy, ExitTrigger, Menu, MenuId};
pub use navigation::{Activation, NavigationStack};
pub use staging::Staging;
pub use store::{ConfigStore, FieldId, FieldWrite, MemoryStore, SharedStore, StoreError};
pub use tree::{MenuTree, MenuTreeBuilder};
pub use widget::{Bounded, EnumTable, FieldRef, Transform, Widget};
