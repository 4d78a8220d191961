use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use taskdesk::ui::core::{EventHandler, EventType};

#[test]
fn test_default_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(100));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(5)).tick_rate(),
        Duration::from_millis(5)
    );
}

#[test]
fn test_only_key_presses_become_key_events() {
    let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(EventType::from(Event::Key(press)), EventType::Key(press));

    let mut release = press;
    release.kind = KeyEventKind::Release;
    assert_eq!(EventType::from(Event::Key(release)), EventType::Other);
}

#[test]
fn test_resize_events() {
    assert_eq!(EventType::from(Event::Resize(80, 24)), EventType::Resize(80, 24));
    assert_eq!(EventType::from(Event::FocusGained), EventType::Other);
}
