//! Tests for the four observers against an in-memory screen.

use clicker_core::{
    BonusSystem, CounterDisplay, Element, LevelDisplay, Locale, Marker, Observer, Rules, Screen,
    SharedSurface, Signal, Snapshot, Surface, UpgradeId, UpgradeSpec, UpgradeSystem,
};
use std::cell::RefCell;
use std::rc::Rc;

fn screen() -> Rc<RefCell<Screen>> {
    Screen::new(&Rules::default(), Screen::default_upgrades()).shared()
}

fn snapshot(click_count: i64, level: u32) -> Snapshot {
    Snapshot { click_count, level }
}

#[test]
fn test_counter_display_renders_count() {
    let screen = screen();
    let display = CounterDisplay::new(screen.clone(), Locale::Ru);

    let signal = display.update(&snapshot(1500, 1)).unwrap();

    assert_eq!(signal, None);
    assert_eq!(screen.borrow().text(Element::ClickCounter), "Кликов: 1500");
}

#[test]
fn test_counter_display_english() {
    let screen = screen();
    let display = CounterDisplay::new(screen.clone(), Locale::En);
    display.update(&snapshot(-3, 1)).unwrap();
    assert_eq!(screen.borrow().text(Element::ClickCounter), "Clicks: -3");
}

#[test]
fn test_bonus_fires_on_nonzero_multiple_of_ten() {
    let screen = screen();
    let bonus = BonusSystem::new(screen.clone(), Locale::Ru, 10);

    let signal = bonus.update(&snapshot(500, 3)).unwrap();

    assert_eq!(signal, Some(Signal::AddBonusClicks { bonus_clicks: 3 }));
    assert_eq!(
        screen.borrow().text(Element::BonusMessage),
        "🎉 Бонус за 10 кликов! +3 кликов!"
    );
}

#[test]
fn test_bonus_clears_message_otherwise() {
    let screen = screen();
    let bonus = BonusSystem::new(screen.clone(), Locale::Ru, 10);

    bonus.update(&snapshot(20, 1)).unwrap();
    assert!(!screen.borrow().text(Element::BonusMessage).is_empty());

    assert_eq!(bonus.update(&snapshot(21, 1)).unwrap(), None);
    assert_eq!(screen.borrow().text(Element::BonusMessage), "");

    assert_eq!(bonus.update(&snapshot(0, 1)).unwrap(), None);
    assert_eq!(screen.borrow().text(Element::BonusMessage), "");
}

#[test]
fn test_bonus_condition_matches_definition() {
    let bonus = BonusSystem::new(screen(), Locale::Ru, 10);
    for count in -50..=50 {
        let expected = count != 0 && count % 10 == 0;
        assert_eq!(bonus.qualifies(count), expected, "count {count}");
    }
}

#[test]
fn test_bonus_zero_interval_never_fires() {
    let bonus = BonusSystem::new(screen(), Locale::Ru, 0);
    assert!(!bonus.qualifies(10));
}

#[test]
fn test_level_display_renders_level_without_win() {
    let screen = screen();
    let level = LevelDisplay::new(screen.clone(), Locale::Ru, 4);

    level.update(&snapshot(0, 3)).unwrap();

    let screen = screen.borrow();
    assert_eq!(screen.text(Element::LevelDisplay), "Уровень: 3");
    assert_eq!(screen.text(Element::ClickButton), "Кликни!");
    assert!(!screen.has_marker(Element::ClickButton, Marker::Won));
}

#[test]
fn test_level_display_applies_win_at_level_four() {
    let screen = screen();
    let level = LevelDisplay::new(screen.clone(), Locale::Ru, 4);

    level.update(&snapshot(0, 4)).unwrap();

    let view = screen.borrow();
    assert_eq!(view.text(Element::ClickButton), "Победа!");
    assert!(view.has_marker(Element::ClickButton, Marker::Won));
}

#[test]
fn test_win_is_never_reverted() {
    let screen = screen();
    let level = LevelDisplay::new(screen.clone(), Locale::En, 4);

    level.update(&snapshot(0, 4)).unwrap();
    level.update(&snapshot(0, 5)).unwrap();

    let view = screen.borrow();
    assert_eq!(view.text(Element::LevelDisplay), "Level: 5");
    assert_eq!(view.text(Element::ClickButton), "Victory!");
    assert!(view.has_marker(Element::ClickButton, Marker::Won));
}

#[test]
fn test_upgrade_system_ignores_broadcasts() {
    let screen = screen();
    let upgrades = UpgradeSystem::new(screen.clone());
    let before = screen.borrow().clone();

    assert_eq!(upgrades.update(&snapshot(1000, 2)).unwrap(), None);

    let after = screen.borrow();
    assert_eq!(after.upgrades(), before.upgrades());
    assert_eq!(after.text(Element::ClickCounter), before.text(Element::ClickCounter));
}

#[test]
fn test_upgrade_click_requests_unlock() {
    let screen = screen();
    let upgrades = UpgradeSystem::new(screen.clone());

    let signal = upgrades.handle_upgrade_click(UpgradeId::from(1));

    assert_eq!(
        signal,
        Some(Signal::UnlockUpgrade {
            upgrade: UpgradeId::from(1),
            required_clicks: 5000,
        })
    );
}

#[test]
fn test_upgrade_click_on_unlocked_is_ignored() {
    let screen = screen();
    let upgrades = UpgradeSystem::new(screen.clone());
    screen.borrow_mut().unlock_upgrade(UpgradeId::from(0));

    assert_eq!(upgrades.handle_upgrade_click(UpgradeId::from(0)), None);
}

#[test]
fn test_upgrade_system_only_attaches_to_locked_upgrades() {
    let mut raw = Screen::new(
        &Rules::default(),
        vec![UpgradeSpec::new("a", 10), UpgradeSpec::new("b", 20)],
    );
    raw.unlock_upgrade(UpgradeId::from(0));
    let surface: SharedSurface = raw.shared();

    let upgrades = UpgradeSystem::new(surface);

    assert_eq!(upgrades.attached(), &[UpgradeId::from(1)]);
    assert_eq!(upgrades.handle_upgrade_click(UpgradeId::from(0)), None);
    assert_eq!(upgrades.handle_upgrade_click(UpgradeId::from(7)), None);
}

#[test]
fn test_signal_names_match_event_names() {
    assert_eq!(Signal::AddBonusClicks { bonus_clicks: 1 }.name(), "addBonusClicks");
    assert_eq!(
        Signal::UnlockUpgrade {
            upgrade: UpgradeId::from(0),
            required_clicks: 1,
        }
        .name(),
        "unlockUpgrade"
    );
}
