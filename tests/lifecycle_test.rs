//! Tests for the end-of-match flag.

use king_of_the_hill::{GameLifecycle, PlayerId};
use std::cell::Cell;

#[test]
fn test_starts_running() {
    let lifecycle = GameLifecycle::new();
    assert!(!lifecycle.is_over());
    assert_eq!(lifecycle.winner(), None);
}

#[test]
fn test_conclude_with_winner() {
    let lifecycle = GameLifecycle::new();
    let ran = Cell::new(false);
    assert!(lifecycle.conclude(Some(PlayerId::One), || {
        // Runs before the flag flips
        assert!(!lifecycle.is_over());
        ran.set(true);
    }));
    assert!(ran.get());
    assert!(lifecycle.is_over());
    assert_eq!(lifecycle.winner(), Some(PlayerId::One));
}

#[test]
fn test_conclude_only_once() {
    let lifecycle = GameLifecycle::new();
    assert!(lifecycle.conclude(None, || {}));

    let ran = Cell::new(false);
    assert!(!lifecycle.conclude(Some(PlayerId::Zero), || ran.set(true)));
    assert!(!ran.get(), "Late conclusion must not announce");
    assert!(lifecycle.is_over());
    assert_eq!(lifecycle.winner(), None, "Quit is final");
}
