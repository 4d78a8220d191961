//! Helpers shared by the UI tests

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Frame, Terminal};
use taskdesk::model::{Priority, Task};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn task(id: &str, title: &str, completed: bool, priority: Priority, due: Option<(i32, u32, u32)>) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        priority,
        due_date: due.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()),
        completed,
        user_id: Some("u1".to_string()),
    }
}

/// Draw once into an in-memory terminal and return the screen as text
pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
