use crate::constants::{APP_TITLE, DIALOG_TITLE_DEBUG_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

use super::common::render_scrolled_lines;

const HELP_TEXT: &str = r"
NAVIGATION
----------
j/k, ↓/↑    Move through tasks (or users in the admin panel)
Enter       Edit task / open a user's tasks
Esc         Cancel action or close dialogs

TASKS
-----
a           Create new task
e           Edit selected task
Space       Toggle task completion
d           Delete task (with confirmation)
f           Cycle filter: All → Completed → Pending
s           Cycle sort: Newest → Oldest → Priority
r           Reload tasks from the server

ADMIN PANEL (administrators only)
---------------------------------
A           Open the admin panel
n           Create a new admin account
r           Reload statistics and users
b, Esc      Back to your tasks

SIGN IN
-------
Tab         Next field
Enter       Submit
Ctrl+N      Create an account
Ctrl+G      Sign in with a Google ID token

GENERAL
-------
L           Sign out
G           Show logs
?           Toggle help
q, Ctrl+C   Quit

Priorities: ⚑ High (red), ⚑ Medium (orange), ⚑ Low (blue)
Tasks without a due date sort last.
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let message = format!("Are you sure you want to delete \"{}\"?", title);
    let instructions = "Press Enter or y to confirm, Esc or n to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title("⚠ Confirm Delete")
        .style(Style::default().fg(Color::Red));

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let inner = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}

/// Info and error dialogs differ only in title and color
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines = wrap_lines(message, content_area.width as usize);
    let instructions = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    render_scrolled_lines(f, content_area, &lines, scroll_offset, scrollbar_state);
    f.render_widget(instructions, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let lines: Vec<String> = HELP_TEXT.lines().map(str::to_string).collect();
    let title = format!("📖 {} Help - Press 'Esc' or '?' to close", APP_TITLE);
    render_full_panel(f, area, &title, &lines, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = match logger {
        Some(logger) => logger.get_logs(),
        None => vec!["No logger available".to_string()],
    };
    let lines = if logs.is_empty() {
        vec!["No logs yet".to_string()]
    } else {
        logs
    };
    render_full_panel(f, area, DIALOG_TITLE_DEBUG_LOGS, &lines, scroll_offset, scrollbar_state);
}

fn render_full_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));

    let content_area = Rect::new(
        panel_area.x + 2,
        panel_area.y + 1,
        panel_area.width.saturating_sub(4),
        panel_area.height.saturating_sub(2),
    );

    f.render_widget(block, panel_area);
    render_scrolled_lines(f, content_area, lines, scroll_offset, scrollbar_state);
}

/// Hard-wrap text to `width` columns so scrolling works on display lines
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = raw.chars().collect();
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}
