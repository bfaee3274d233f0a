//! Shared fixtures for the integration tests
//!
//! A two-level menu tree (PARENT → CHILD) over a handful of fields, plus a
//! small deterministic generator for edit sequences.

use cms_core::{
    Bounded, Entry, EnumTable, ExitPolicy, FieldId, FieldRef, MemoryStore, Menu, MenuId, MenuTree,
};

pub const PARENT_GAIN: FieldId = FieldId::new("parent.gain");
pub const PARENT_MODE: FieldId = FieldId::new("parent.mode");
pub const CHILD_IDLE: FieldId = FieldId::new("child.idle");
pub const CHILD_OFFSET: FieldId = FieldId::new("child.offset");

pub const MODE_NAMES: &[&str] = &["OFF", "LOW", "HIGH"];

pub struct Fixture {
    pub tree: MenuTree,
    pub parent: MenuId,
    pub child: MenuId,
}

/// PARENT (gain, mode, CHILD submenu, BACK) and CHILD (idle ×10, offset, BACK)
pub fn fixture(child_policy: ExitPolicy) -> Fixture {
    let mut builder = MenuTree::builder();
    let child = builder.add(
        Menu::new("CHILD")
            .entry(Entry::label("-- CHILD --"))
            .entry(Entry::uint8(
                "IDLE",
                Bounded::new(FieldRef::scaled(CHILD_IDLE, 10), 0, 200, 1),
            ))
            .entry(Entry::int16(
                "OFFSET",
                Bounded::new(FieldRef::new(CHILD_OFFSET), -16000, 16000, 5),
            ))
            .entry(Entry::back())
            .exit_policy(child_policy),
    );
    let parent = builder.add(
        Menu::new("PARENT")
            .entry(Entry::label("-- PARENT --"))
            .entry(Entry::uint16(
                "GAIN",
                Bounded::new(FieldRef::new(PARENT_GAIN), 1000, 2000, 1),
            ))
            .entry(Entry::enum_table(
                "MODE",
                EnumTable::from_names(FieldRef::new(PARENT_MODE), MODE_NAMES),
            ))
            .entry(Entry::submenu("CHILD", child))
            .entry(Entry::back()),
    );
    let tree = builder.build(parent).expect("fixture tree");
    Fixture {
        tree,
        parent,
        child,
    }
}

pub fn fixture_store() -> MemoryStore {
    MemoryStore::new()
        .with_field(PARENT_GAIN, 1070)
        .with_field(PARENT_MODE, 1)
        .with_field(CHILD_IDLE, 50)
        .with_field(CHILD_OFFSET, 0)
        .with_limit(CHILD_OFFSET, -32768..=32767)
}

/// Index of the entry labelled `label` in `menu`
pub fn entry_index(tree: &MenuTree, menu: MenuId, label: &str) -> usize {
    tree.get(menu)
        .and_then(|m| m.entries.iter().position(|e| e.label == label))
        .expect("entry present")
}

/// Deterministic edit deltas in -50..=50
pub fn deltas(seed: u64, count: usize) -> Vec<i32> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 101) as i32 - 50
        })
        .collect()
}
