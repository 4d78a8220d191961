use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::model::Priority;

/// Color a priority is drawn with
#[must_use]
pub fn priority_color(priority: &Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Rgb(255, 165, 0),
        Priority::Low => Color::Blue,
        Priority::Unrecognized(_) => Color::White,
    }
}

/// Create priority badges with flag symbols
#[must_use]
pub fn create_priority_badge(priority: &Priority) -> Span<'static> {
    if priority.is_recognized() {
        Span::styled(
            format!("⚑ {:<6}", priority.label()),
            Style::default().fg(priority_color(priority)).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!("⚐ {:<6}", priority.to_string()), Style::default().fg(Color::White))
    }
}

/// Checkbox for the completion state
#[must_use]
pub fn create_status_badge(completed: bool) -> Span<'static> {
    if completed {
        Span::styled("[x]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("[ ]", Style::default().fg(Color::Gray))
    }
}

/// Create badges with parentheses, used for the due date
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(format!("({text})"), Style::default().fg(Color::LightYellow))
}
