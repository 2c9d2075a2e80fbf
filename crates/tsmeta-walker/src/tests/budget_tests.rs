use crate::budget::{BreadthLedger, EnterOutcome, RecursionGuard};
use tsmeta_host::TypeId;

// =============================================================================
// RecursionGuard
// =============================================================================

#[test]
fn basic_enter_leave() {
    let mut guard = RecursionGuard::new(10);
    assert_eq!(guard.enter(TypeId(100), None), EnterOutcome::Entered);
    assert_eq!(guard.depth(), 1);
    assert!(guard.is_visiting(TypeId(100)));

    assert!(!guard.leave(TypeId(100)), "no back-reference occurred");
    assert_eq!(guard.depth(), 0);
    assert!(!guard.is_visiting(TypeId(100)));
}

#[test]
fn reentry_is_a_cycle_with_pending_name() {
    let mut guard = RecursionGuard::new(10);
    guard.enter(TypeId(100), Some("Node".into()));
    assert_eq!(
        guard.enter(TypeId(100), None),
        EnterOutcome::Cycle(Some("Node".into()))
    );
    assert!(guard.leave(TypeId(100)), "cycle marks the entry referenced");
}

#[test]
fn reentry_without_name_reports_none() {
    let mut guard = RecursionGuard::new(10);
    guard.enter(TypeId(100), None);
    assert_eq!(guard.enter(TypeId(100), None), EnterOutcome::Cycle(None));
}

#[test]
fn depth_budget_trips() {
    let mut guard = RecursionGuard::new(2);
    assert_eq!(guard.enter(TypeId(1), None), EnterOutcome::Entered);
    assert_eq!(guard.enter(TypeId(2), None), EnterOutcome::Entered);
    assert_eq!(guard.enter(TypeId(3), None), EnterOutcome::DepthExceeded);
    // the failed enter must not need a matching leave
    guard.leave(TypeId(2));
    guard.leave(TypeId(1));
    assert_eq!(guard.depth(), 0);
}

#[test]
fn pending_name_is_queryable() {
    let mut guard = RecursionGuard::new(10);
    guard.enter(TypeId(7), Some("Tree".into()));
    assert_eq!(guard.pending_name(TypeId(7)), Some("Tree"));
    assert_eq!(guard.pending_name(TypeId(8)), None);
}

// =============================================================================
// BreadthLedger
// =============================================================================

#[test]
fn charge_decrements_innermost_frame() {
    let mut ledger = BreadthLedger::new();
    ledger.push(2, "T");
    assert!(ledger.charge());
    assert!(ledger.charge());
    assert!(!ledger.charge(), "third charge exceeds the budget of 2");
}

#[test]
fn nested_frame_isolates_parent_budget() {
    let mut ledger = BreadthLedger::new();
    ledger.push(2, "Parent");
    assert!(ledger.charge());

    // entering a named sub-type gets a fresh window
    ledger.push(5, "Child");
    for _ in 0..5 {
        assert!(ledger.charge());
    }
    assert!(!ledger.charge(), "child window exhausted");
    ledger.pop();

    assert!(ledger.charge(), "parent still has its second unit");
    assert!(!ledger.charge());
}

#[test]
fn subject_tracks_innermost_frame() {
    let mut ledger = BreadthLedger::new();
    assert_eq!(ledger.subject(), "<anonymous>");
    ledger.push(1, "Outer");
    ledger.push(1, "Inner");
    assert_eq!(ledger.subject(), "Inner");
    ledger.pop();
    assert_eq!(ledger.subject(), "Outer");
}

#[test]
fn charging_with_no_frame_is_unbounded() {
    let mut ledger = BreadthLedger::new();
    assert!(ledger.charge());
}
