//! Tests for the game state and its observer registry.

use clicker_core::{CLICK_INCREMENT, GameError, GameState, Observer, Signal, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<(&'static str, Snapshot)>>>;

struct Recorder {
    name: &'static str,
    log: Log,
}

impl Observer for Recorder {
    fn name(&self) -> &str {
        self.name
    }

    fn update(&self, snapshot: &Snapshot) -> Result<Option<Signal>, GameError> {
        self.log.borrow_mut().push((self.name, *snapshot));
        Ok(None)
    }
}

/// Forgets to override `update`.
struct Lazy;

impl Observer for Lazy {
    fn name(&self) -> &str {
        "Lazy"
    }
}

fn recorder(name: &'static str, log: &Log) -> Rc<dyn Observer> {
    Rc::new(Recorder {
        name,
        log: log.clone(),
    })
}

#[test]
fn test_new_game_starts_at_zero_level_one() {
    let state = GameState::new();
    assert_eq!(state.click_count(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.observer_count(), 0);
}

#[test]
fn test_click_adds_increment_and_notifies_once_per_call() {
    let log = Log::default();
    let mut state = GameState::new();
    state.subscribe(recorder("a", &log));

    for n in 1..=3 {
        state.click().unwrap();
        assert_eq!(state.click_count(), CLICK_INCREMENT * n);
    }

    let counts: Vec<i64> = log.borrow().iter().map(|(_, s)| s.click_count).collect();
    assert_eq!(counts, vec![500, 1000, 1500]);
}

#[test]
fn test_notification_follows_subscription_order() {
    let log = Log::default();
    let mut state = GameState::new();
    state.subscribe(recorder("first", &log));
    state.subscribe(recorder("second", &log));
    state.subscribe(recorder("third", &log));

    state.click().unwrap();

    let names: Vec<&str> = log.borrow().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_payload_is_current_snapshot() {
    let log = Log::default();
    let mut state = GameState::new();
    state.subscribe(recorder("a", &log));

    state.click().unwrap();
    state.advance_level();
    state.decrement_clicks(200).unwrap();

    let last = log.borrow().last().map(|(_, s)| *s).unwrap();
    assert_eq!(last, state.snapshot());
    assert_eq!(
        last,
        Snapshot {
            click_count: 300,
            level: 2
        }
    );
}

#[test]
fn test_increment_clicks_is_silent() {
    let log = Log::default();
    let mut state = GameState::new();
    state.subscribe(recorder("a", &log));

    state.increment_clicks(42);

    assert_eq!(state.click_count(), 42);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_decrement_has_no_floor() {
    let mut state = GameState::new();
    state.decrement_clicks(700).unwrap();
    assert_eq!(state.click_count(), -700);

    state.decrement_click().unwrap();
    assert_eq!(state.click_count(), -701);
}

#[test]
fn test_unsubscribed_observer_gets_nothing() {
    let log = Log::default();
    let other = Log::default();
    let mut state = GameState::new();
    let gone = recorder("gone", &log);
    state.subscribe(gone.clone());
    state.subscribe(recorder("kept", &other));

    assert!(state.unsubscribe(&gone));
    state.click().unwrap();
    state.decrement_clicks(1).unwrap();

    assert!(log.borrow().is_empty());
    assert_eq!(other.borrow().len(), 2);
    assert!(!state.unsubscribe(&gone));
}

#[test]
fn test_unsubscribe_uses_identity_not_name() {
    let log = Log::default();
    let mut state = GameState::new();
    let one = recorder("same", &log);
    let two = recorder("same", &log);
    state.subscribe(one.clone());
    state.subscribe(two);

    state.unsubscribe(&one);

    assert_eq!(state.observer_count(), 1);
}

#[test]
fn test_missing_update_aborts_remaining_notifications() {
    let log = Log::default();
    let mut state = GameState::new();
    state.subscribe(recorder("before", &log));
    state.subscribe(Rc::new(Lazy));
    state.subscribe(recorder("after", &log));

    let result = state.click();

    assert_eq!(result, Err(GameError::not_implemented("Lazy")));
    let names: Vec<&str> = log.borrow().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["before"]);
    assert_eq!(state.click_count(), 500);
}

#[test]
fn test_not_implemented_message_names_observer() {
    let err = GameError::not_implemented("Lazy");
    assert!(err.to_string().contains("Lazy"));
}
