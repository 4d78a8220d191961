//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::Screen;

/// Status bar component
#[derive(Debug, Default)]
pub struct StatusBar {
    message: Option<String>,
    activity: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` until the next one replaces it
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// A running background operation, shown in place of the message
    pub fn set_activity(&mut self, activity: Option<String>) {
        self.activity = activity;
    }

    fn shortcuts(screen: Screen) -> &'static str {
        match screen {
            Screen::Login | Screen::Register => "Tab: next field • Enter: submit • Ctrl+C: quit",
            Screen::Dashboard => {
                "a: add • e: edit • Space: toggle • d: delete • f: filter • s: sort • r: reload • ?: help • q: quit"
            }
            Screen::Admin => "Enter: user tasks • n: new admin • r: reload • b: back • ?: help • q: quit",
        }
    }

    /// Render the status bar
    pub fn render(&self, f: &mut Frame, area: Rect, screen: Screen) {
        let (status_text, status_color) = if let Some(activity) = &self.activity {
            (format!("🔄 {}...", activity), Color::Yellow)
        } else if let Some(message) = &self.message {
            let color = if message.starts_with('❌') { Color::Red } else { Color::Green };
            (message.clone(), color)
        } else {
            (Self::shortcuts(screen).to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
