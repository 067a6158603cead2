//! Tests for key bindings and UI state handling.

use clicker::{App, ClickerConfig, Input, map_key};
use crossterm::event::KeyCode;

#[test]
fn test_key_bindings() {
    assert_eq!(map_key(KeyCode::Char(' ')), Some(Input::Click));
    assert_eq!(map_key(KeyCode::Enter), Some(Input::Click));
    assert_eq!(map_key(KeyCode::Char('1')), Some(Input::Unlock(0)));
    assert_eq!(map_key(KeyCode::Char('9')), Some(Input::Unlock(8)));
    assert_eq!(map_key(KeyCode::Char('0')), None);
    assert_eq!(map_key(KeyCode::Char('u')), Some(Input::UnlockSelected));
    assert_eq!(map_key(KeyCode::Down), Some(Input::SelectNext));
    assert_eq!(map_key(KeyCode::Up), Some(Input::SelectPrevious));
    assert_eq!(map_key(KeyCode::Char('q')), Some(Input::Quit));
    assert_eq!(map_key(KeyCode::Esc), Some(Input::Quit));
    assert_eq!(map_key(KeyCode::Char('x')), None);
}

#[test]
fn test_selection_wraps() {
    let mut app = App::new(&ClickerConfig::default());
    assert_eq!(app.selected(), 0);

    app.handle(Input::SelectPrevious).unwrap();
    assert_eq!(app.selected(), 2);

    app.handle(Input::SelectNext).unwrap();
    assert_eq!(app.selected(), 0);
}

#[test]
fn test_click_then_unlock_selected() {
    let mut app = App::new(&ClickerConfig::default());

    app.handle(Input::Click).unwrap();
    app.handle(Input::UnlockSelected).unwrap();

    assert_eq!(app.game().state().level(), 2);
    assert!(*app.screen().upgrades()[0].unlocked());
}

#[test]
fn test_unlock_out_of_range_is_ignored() {
    let mut app = App::new(&ClickerConfig::default());
    app.handle(Input::Click).unwrap();

    app.handle(Input::Unlock(8)).unwrap();

    assert_eq!(app.game().state().level(), 1);
    assert_eq!(app.selected(), 0);
}

#[test]
fn test_quit() {
    let mut app = App::new(&ClickerConfig::default());
    assert!(!app.should_quit());
    app.handle(Input::Quit).unwrap();
    assert!(app.should_quit());
}
