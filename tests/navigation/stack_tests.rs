// Navigation stack tests - push/pop order, cursor movement, live entries

use cms_core::{
    Activation, Bounded, CmsError, ConfigStore, Entry, EntryFlags, ExitPolicy, FieldId, FieldRef,
    MemoryStore, Menu, MenuTree, NavigationStack, SharedStore,
};
use cms_tests::{CHILD_OFFSET, PARENT_GAIN, PARENT_MODE, entry_index, fixture, fixture_store};
use std::thread;

#[test]
fn submenu_round_trip_commits_child_then_parent() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "MODE")));
    nav.edit_highlighted(1);

    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "CHILD")));
    nav.activate_highlighted(&mut store).expect("enter child");
    assert_eq!(nav.breadcrumbs(), vec!["PARENT", "CHILD"]);

    assert!(nav.highlight(entry_index(&fx.tree, fx.child, "OFFSET")));
    nav.edit_highlighted(-2);

    assert_eq!(nav.request_back(&mut store).expect("back"), fx.child);
    assert_eq!(store.read(CHILD_OFFSET), Some(-10));
    // The parent resumes with its pending edit intact
    assert_eq!(store.read(PARENT_MODE), Some(1));
    assert_eq!(nav.staging().and_then(|s| s.value(PARENT_MODE)), Some(2));

    assert_eq!(nav.request_back(&mut store).expect("back"), fx.parent);
    assert_eq!(store.read(PARENT_MODE), Some(2));
    assert!(!nav.is_open());
}

#[test]
fn exit_all_unwinds_every_menu() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");
    nav.open(fx.child, &store).expect("open child");

    assert!(nav.highlight(entry_index(&fx.tree, fx.child, "OFFSET")));
    nav.edit_highlighted(1);

    nav.request_exit_all(&mut store).expect("exit all");
    assert_eq!(nav.depth(), 0);
    assert_eq!(store.read(CHILD_OFFSET), Some(5));
    assert!(matches!(
        nav.request_exit_all(&mut store),
        Err(CmsError::NoMenuOpen)
    ));
}

#[test]
fn exit_all_stops_at_failing_ancestor() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store().with_limit(PARENT_GAIN, 0..=1070);
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "GAIN")));
    nav.edit_highlighted(1);
    nav.open(fx.child, &store).expect("open child");
    assert!(nav.highlight(entry_index(&fx.tree, fx.child, "OFFSET")));
    nav.edit_highlighted(1);

    let err = nav.request_exit_all(&mut store).unwrap_err();
    assert!(matches!(err, CmsError::CommitFailed { ref menu, .. } if menu == "PARENT"));
    // Child already closed and committed, parent still open
    assert_eq!(store.read(CHILD_OFFSET), Some(5));
    assert_eq!(nav.current_menu(), Some(fx.parent));
    assert!(!nav.is_menu_open(fx.child));
}

#[test]
fn cursor_wraps_and_skips_labels() {
    let fx = fixture(ExitPolicy::Always);
    let store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    let gain = entry_index(&fx.tree, fx.parent, "GAIN");
    let back = entry_index(&fx.tree, fx.parent, "BACK");
    assert_eq!(nav.highlighted(), Some(gain));

    nav.highlight_previous();
    assert_eq!(nav.highlighted(), Some(back));
    nav.highlight_next();
    assert_eq!(nav.highlighted(), Some(gain));

    assert!(!nav.highlight(0), "section labels cannot be highlighted");
    assert!(!nav.highlight(99));
    assert_eq!(nav.highlighted(), Some(gain));
}

#[test]
fn non_editable_entries_ignore_edits() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "CHILD")));
    assert_eq!(nav.edit_highlighted(1), None);
    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "BACK")));
    assert_eq!(nav.edit_highlighted(1), None);
    assert_eq!(
        nav.activate_highlighted(&mut store).expect("back"),
        Activation::Closed(fx.parent)
    );
}

const STICK: FieldId = FieldId::new("rc.roll");
const ALT: FieldId = FieldId::new("rc.pitch");

fn live_tree() -> MenuTree {
    let mut builder = MenuTree::builder();
    let root = builder.add(
        Menu::new("LIVE")
            .entry(Entry::int16("ROLL", Bounded::new(FieldRef::new(STICK), 1, 2500, 1)).dynamic())
            .entry(
                Entry::int16("PITCH", Bounded::new(FieldRef::new(ALT), 1, 2500, 1))
                    .with_flags(EntryFlags::READ_ONLY),
            )
            .entry(Entry::back())
            .exit_policy(ExitPolicy::OwnBackOnly),
    );
    builder.build(root).expect("tree")
}

#[test]
fn dynamic_entries_mirror_the_live_source() {
    let tree = live_tree();
    let mut store = MemoryStore::new().with_field(STICK, 1500).with_field(ALT, 1500);
    let mut nav = NavigationStack::new(&tree);
    nav.open_root(&store).expect("open");
    assert_eq!(nav.display_value(0).as_deref(), Some("1500"));

    store.write(STICK, 1720).expect("write");
    nav.dynamic_refresh(&store);
    assert_eq!(nav.value(0), Some(1720));
    assert_eq!(nav.edit_highlighted(1), None);

    // Live values are never committed back
    store.write(STICK, 1100).expect("write");
    nav.request_back(&mut store).expect("back");
    assert_eq!(store.read(STICK), Some(1100));
}

#[test]
fn read_only_entries_are_not_editable() {
    let tree = live_tree();
    let store = MemoryStore::new().with_field(STICK, 1500).with_field(ALT, 1400);
    let mut nav = NavigationStack::new(&tree);
    nav.open_root(&store).expect("open");

    assert!(nav.highlight(1));
    assert_eq!(nav.edit_highlighted(1), None);
    assert_eq!(nav.value(1), Some(1400));
}

#[test]
fn dynamic_refresh_sees_writes_from_another_thread() {
    let tree = live_tree();
    let store = SharedStore::new(MemoryStore::new().with_field(STICK, 1500).with_field(ALT, 1500));
    let mut nav = NavigationStack::new(&tree);
    nav.open_root(&store).expect("open");

    let mut writer = store.clone();
    thread::spawn(move || writer.write(STICK, 1999).expect("write"))
        .join()
        .expect("writer thread");

    nav.dynamic_refresh(&store);
    assert_eq!(nav.value(0), Some(1999));
}
