// Staging tests - values are copied on enter and written back on exit
//
// Covers the transform round trip, idempotent visits, commit failures and
// enter failures.

use cms_core::{
    CmsError, ConfigStore, ExitPolicy, MemoryStore, NavigationStack, StoreError,
};
use cms_tests::{
    CHILD_IDLE, CHILD_OFFSET, PARENT_GAIN, PARENT_MODE, entry_index, fixture, fixture_store,
};

#[test]
fn edits_are_invisible_until_exit() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "GAIN")));
    assert_eq!(nav.edit_highlighted(5), Some(1075));
    assert_eq!(store.read(PARENT_GAIN), Some(1070));

    nav.request_back(&mut store).expect("back");
    assert_eq!(store.read(PARENT_GAIN), Some(1075));
}

#[test]
fn scaled_field_round_trips_through_display_units() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");
    nav.open(fx.child, &store).expect("open child");

    let idle = entry_index(&fx.tree, fx.child, "IDLE");
    assert_eq!(nav.value(idle), Some(5));

    assert!(nav.highlight(idle));
    assert_eq!(nav.edit_highlighted(2), Some(7));
    nav.request_back(&mut store).expect("back");

    assert_eq!(store.read(CHILD_IDLE), Some(70));
}

#[test]
fn visit_without_edits_leaves_store_unchanged() {
    let fx = fixture(ExitPolicy::Always);
    // 55 is not a multiple of the ×10 scale
    let mut store = fixture_store().with_field(CHILD_IDLE, 55);
    let before = store.clone();

    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");
    nav.open(fx.child, &store).expect("open child");
    nav.request_back(&mut store).expect("back child");
    nav.request_back(&mut store).expect("back parent");

    assert_eq!(store, before);
}

#[test]
fn edit_then_revert_is_not_written() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store().with_field(CHILD_IDLE, 55);
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open(fx.child, &store).expect("open");

    assert!(nav.highlight(entry_index(&fx.tree, fx.child, "IDLE")));
    nav.edit_highlighted(1);
    nav.edit_highlighted(-1);
    assert!(!nav.staging().expect("staging").is_dirty());

    nav.request_back(&mut store).expect("back");
    assert_eq!(store.read(CHILD_IDLE), Some(55));
}

#[test]
fn failed_commit_keeps_menu_open_and_store_untouched() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store()
        .with_limit(PARENT_MODE, 0..=1)
        .with_limit(PARENT_GAIN, 0..=2000);
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "GAIN")));
    nav.edit_highlighted(10);
    assert!(nav.highlight(entry_index(&fx.tree, fx.parent, "MODE")));
    assert_eq!(nav.edit_highlighted(1), Some(2));

    let err = nav.request_back(&mut store).unwrap_err();
    assert!(matches!(
        err,
        CmsError::CommitFailed {
            source: StoreError::OutOfRange { value: 2, .. },
            ..
        }
    ));
    assert_eq!(nav.current_menu(), Some(fx.parent));
    assert_eq!(store.read(PARENT_GAIN), Some(1070));
    assert_eq!(store.read(PARENT_MODE), Some(1));

    // The staging survives, so the operator can correct and retry
    nav.edit_highlighted(-1);
    nav.request_back(&mut store).expect("back");
    assert_eq!(store.read(PARENT_GAIN), Some(1080));
    assert_eq!(store.read(PARENT_MODE), Some(1));
}

#[test]
fn enter_failure_is_not_pushed() {
    let fx = fixture(ExitPolicy::Always);
    let store = MemoryStore::new()
        .with_field(PARENT_GAIN, 1070)
        .with_field(PARENT_MODE, 0)
        .with_field(CHILD_IDLE, 50);
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open_root(&store).expect("open");

    let err = nav.open(fx.child, &store).unwrap_err();
    assert!(matches!(err, CmsError::EnterFailed { ref menu, .. } if menu == "CHILD"));
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current_menu(), Some(fx.parent));
}

#[test]
fn restaged_on_every_visit() {
    let fx = fixture(ExitPolicy::Always);
    let mut store = fixture_store();
    let mut nav = NavigationStack::new(&fx.tree);
    nav.open(fx.child, &store).expect("open");

    store.write(CHILD_OFFSET, 40).expect("write");
    let offset = entry_index(&fx.tree, fx.child, "OFFSET");
    assert_eq!(nav.value(offset), Some(0));

    nav.request_back(&mut store).expect("back");
    nav.open(fx.child, &store).expect("reopen");
    assert_eq!(nav.value(offset), Some(40));
}
