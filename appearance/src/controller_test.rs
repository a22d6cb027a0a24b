use super::*;
use crate::monitor::ManualMonitor;
use crate::store::MemoryStorage;
use std::cell::RefCell;

struct Harness {
    storage: MemoryStorage,
    monitor: ManualMonitor,
    applied: Rc<RefCell<Vec<AppearanceState>>>,
    controller: AppearanceController<MemoryStorage>,
}

fn harness(storage: MemoryStorage, system_dark: bool) -> Harness {
    let monitor = ManualMonitor::new(system_dark);
    let applied = Rc::new(RefCell::new(Vec::new()));
    let sink_log = Rc::clone(&applied);
    let controller = AppearanceController::new(
        PreferenceStore::new(storage.clone()),
        &monitor,
        move |state: AppearanceState| sink_log.borrow_mut().push(state),
    );
    Harness { storage, monitor, applied, controller }
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn fresh_profile_follows_dark_system_without_writing() {
    let h = harness(MemoryStorage::new(), true);
    assert!(h.controller.current().is_dark);
    assert!(h.controller.current().is_pending);
    assert_eq!(h.controller.source(), ResolutionSource::System);
    assert_eq!(h.storage.peek("theme"), None);
    assert_eq!(h.storage.write_count(), 0);

    assert!(h.controller.settle());
    assert!(!h.controller.current().is_pending);
    assert_eq!(h.storage.peek("theme"), None);
}

#[test]
fn fresh_profile_light_system_defaults_light() {
    let h = harness(MemoryStorage::new(), false);
    assert!(!h.controller.current().is_dark);
    assert_eq!(h.controller.theme(), Theme::Light);
}

#[test]
fn stored_preference_beats_system() {
    let h = harness(MemoryStorage::with_item("theme", "dark"), false);
    assert!(h.controller.current().is_dark);
    assert_eq!(h.controller.source(), ResolutionSource::Stored);
    assert!(h.controller.has_explicit_preference());
}

#[test]
fn stored_light_beats_dark_system() {
    let h = harness(MemoryStorage::with_item("theme", "light"), true);
    assert!(!h.controller.current().is_dark);
}

#[test]
fn unreadable_storage_falls_back_to_system() {
    let storage = MemoryStorage::with_item("theme", "light");
    storage.fail_reads(true);
    let h = harness(storage, true);
    assert!(h.controller.current().is_dark);
    assert_eq!(h.controller.source(), ResolutionSource::System);
}

#[test]
fn construction_applies_pending_snapshot_once() {
    let h = harness(MemoryStorage::new(), true);
    assert_eq!(
        *h.applied.borrow(),
        vec![AppearanceState { is_dark: true, is_pending: true }]
    );
}

// =============================================================
// Pending flag
// =============================================================

#[test]
fn settle_flips_pending_exactly_once() {
    let h = harness(MemoryStorage::new(), false);
    assert!(h.controller.settle());
    assert!(!h.controller.settle());
    h.controller.toggle();
    assert!(!h.controller.current().is_pending);
    assert_eq!(h.applied.borrow().iter().filter(|s| !s.is_pending).count(), 2);
}

#[test]
fn pending_survives_mutation_until_settled() {
    let h = harness(MemoryStorage::new(), false);
    h.controller.toggle();
    assert!(h.controller.current().is_pending);
    assert!(h.controller.settle());
    assert!(!h.controller.current().is_pending);
}

#[test]
fn settle_handle_settles_live_controller() {
    let h = harness(MemoryStorage::new(), false);
    let handle = h.controller.settle_handle();
    assert!(handle.settle());
    assert!(!h.controller.current().is_pending);
    assert!(!handle.settle());
}

#[test]
fn settle_handle_after_drop_is_noop() {
    let h = harness(MemoryStorage::new(), false);
    let handle = h.controller.settle_handle();
    let applied = Rc::clone(&h.applied);
    drop(h);
    assert!(!handle.settle());
    assert_eq!(applied.borrow().len(), 1);
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn toggle_matches_call_parity() {
    for initial in [false, true] {
        let h = harness(MemoryStorage::new(), initial);
        for calls in 1..=7 {
            h.controller.toggle();
            assert_eq!(h.controller.current().is_dark, initial ^ (calls % 2 == 1));
        }
    }
}

#[test]
fn toggle_persists_new_value() {
    let h = harness(MemoryStorage::new(), true);
    h.controller.toggle();
    assert!(!h.controller.current().is_dark);
    assert_eq!(h.controller.store().read(), Some(Theme::Light));
    assert_eq!(h.storage.peek("theme").as_deref(), Some("light"));
    assert_eq!(h.controller.source(), ResolutionSource::Explicit);
}

#[test]
fn set_explicit_writes_even_when_unchanged() {
    let h = harness(MemoryStorage::new(), true);
    h.controller.set_explicit(true);
    assert!(h.controller.current().is_dark);
    assert_eq!(h.storage.peek("theme").as_deref(), Some("dark"));
    assert!(h.controller.has_explicit_preference());
}

#[test]
fn every_mutation_reads_back_consistently() {
    let h = harness(MemoryStorage::new(), false);
    for value in [true, false, false, true] {
        h.controller.set_explicit(value);
        assert_eq!(h.controller.store().read(), Some(Theme::from_dark(value)));
        h.controller.toggle();
        assert_eq!(h.controller.store().read(), Some(Theme::from_dark(!value)));
    }
}

#[test]
fn mutation_applies_whole_snapshot() {
    let h = harness(MemoryStorage::new(), false);
    h.controller.settle();
    h.controller.toggle();
    assert_eq!(
        h.applied.borrow().last().copied(),
        Some(AppearanceState { is_dark: true, is_pending: false })
    );
}

#[test]
fn write_failure_keeps_session_state() {
    let storage = MemoryStorage::new();
    storage.fail_writes(true);
    let h = harness(storage, false);
    h.controller.toggle();
    assert!(h.controller.current().is_dark);
    assert_eq!(h.storage.peek("theme"), None);
}

// =============================================================
// System preference events
// =============================================================

#[test]
fn system_change_before_mutation_is_followed_without_write() {
    let h = harness(MemoryStorage::new(), false);
    h.monitor.set(true);
    assert!(h.controller.current().is_dark);
    assert_eq!(h.storage.peek("theme"), None);
    h.monitor.set(false);
    assert!(!h.controller.current().is_dark);
    assert_eq!(h.storage.write_count(), 0);
}

#[test]
fn system_change_after_toggle_is_ignored() {
    let h = harness(MemoryStorage::new(), false);
    h.controller.toggle();
    h.monitor.set(false);
    h.monitor.set(true);
    h.monitor.set(false);
    assert!(h.controller.current().is_dark);
}

#[test]
fn system_change_ignored_even_when_write_failed() {
    let storage = MemoryStorage::new();
    storage.fail_writes(true);
    let h = harness(storage, false);
    h.controller.set_explicit(false);
    h.monitor.set(true);
    assert!(!h.controller.current().is_dark);
}

#[test]
fn system_change_ignored_when_store_filled_later() {
    let h = harness(MemoryStorage::new(), false);
    h.storage.set_item("theme", "light").unwrap();
    h.monitor.set(true);
    assert!(!h.controller.current().is_dark);
}

#[test]
fn dropping_controller_releases_subscription() {
    let h = harness(MemoryStorage::new(), false);
    assert_eq!(h.monitor.listener_count(), 1);
    let monitor = h.monitor.clone();
    drop(h);
    assert_eq!(monitor.listener_count(), 0);
    monitor.set(true);
}

// =============================================================
// Example scenarios
// =============================================================

#[test]
fn scenario_fresh_profile_dark_system() {
    let h = harness(MemoryStorage::new(), true);
    assert!(h.controller.current().is_dark);
    h.controller.settle_handle().settle();
    assert!(!h.controller.current().is_pending);
    assert_eq!(h.storage.peek("theme"), None);
}

#[test]
fn scenario_fresh_profile_dark_system_then_toggle() {
    let h = harness(MemoryStorage::new(), true);
    h.controller.toggle();
    assert!(!h.controller.current().is_dark);
    assert_eq!(h.storage.peek("theme").as_deref(), Some("light"));
}

#[test]
fn scenario_stored_dark_light_system_change_ignored() {
    let h = harness(MemoryStorage::with_item("theme", "dark"), false);
    assert!(h.controller.current().is_dark);
    h.monitor.set(true);
    h.monitor.set(false);
    assert!(h.controller.current().is_dark);
}

#[test]
fn scenario_no_key_system_flips_dark() {
    let h = harness(MemoryStorage::new(), false);
    h.monitor.set(true);
    assert!(h.controller.current().is_dark);
    assert_eq!(h.storage.peek("theme"), None);
}

#[test]
fn scenario_explicit_dark_then_system_light() {
    let h = harness(MemoryStorage::new(), true);
    h.controller.set_explicit(true);
    h.monitor.set(false);
    assert!(h.controller.current().is_dark);
}
