//! Admin panel: platform statistics, registered users and their tasks.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::{Task, User};
use crate::service::AdminDashboard;
use crate::ui::components::badge::{create_priority_badge, create_status_badge};
use crate::ui::core::{Action, Component, DialogType, Screen};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

pub struct AdminComponent {
    dashboard: Option<AdminDashboard>,
    selected_index: usize,
    table_state: TableState,
    /// Tasks of the user last opened with Enter
    user_tasks: Option<(String, Vec<Task>)>,
    loading: bool,
    date_format: String,
}

impl Default for AdminComponent {
    fn default() -> Self {
        Self::new(datetime::DUE_DATE_FORMAT)
    }
}

impl AdminComponent {
    pub fn new(date_format: &str) -> Self {
        Self {
            dashboard: None,
            selected_index: 0,
            table_state: TableState::default(),
            user_tasks: None,
            loading: false,
            date_format: date_format.to_string(),
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_dashboard(&mut self, dashboard: AdminDashboard) {
        self.dashboard = Some(dashboard);
        self.loading = false;
        let user_count = self.users().len();
        if self.selected_index >= user_count {
            self.selected_index = user_count.saturating_sub(1);
        }
        self.table_state
            .select(if user_count == 0 { None } else { Some(self.selected_index) });
    }

    pub fn dashboard(&self) -> Option<&AdminDashboard> {
        self.dashboard.as_ref()
    }

    pub fn set_user_tasks(&mut self, user_id: String, tasks: Vec<Task>) {
        self.user_tasks = Some((user_id, tasks));
    }

    pub fn user_tasks(&self) -> Option<&(String, Vec<Task>)> {
        self.user_tasks.as_ref()
    }

    pub fn clear(&mut self) {
        self.dashboard = None;
        self.user_tasks = None;
        self.selected_index = 0;
        self.table_state.select(None);
    }

    fn users(&self) -> &[User] {
        self.dashboard.as_ref().map(|d| d.users.as_slice()).unwrap_or_default()
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users().get(self.selected_index)
    }

    fn move_selection(&mut self, forward: bool) {
        let count = self.users().len();
        if count == 0 {
            return;
        }
        self.selected_index = if forward {
            (self.selected_index + 1) % count
        } else {
            (self.selected_index + count - 1) % count
        };
        self.table_state.select(Some(self.selected_index));
    }

    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let stats = self.dashboard.as_ref().map(|d| d.stats).unwrap_or_default();
        let boxes = [
            ("Users", stats.total_users, Color::Cyan),
            ("Tasks", stats.total_tasks, Color::Magenta),
            ("Completed", stats.completed_tasks, Color::Green),
            ("Pending", stats.pending_tasks, Color::Yellow),
        ];
        let columns = LayoutManager::equal_columns(area, boxes.len() as u16);
        for ((label, value, color), column) in boxes.iter().zip(columns.iter()) {
            let paragraph = Paragraph::new(value.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(*color).add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .title(format!(" {} ", label))
                        .style(Style::default().fg(*color)),
                );
            f.render_widget(paragraph, *column);
        }
    }

    fn render_users(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Users ")
            .style(Style::default().fg(Color::White));

        if self.users().is_empty() {
            let message = if self.loading { "Loading admin data..." } else { "No users found" };
            f.render_widget(
                Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray))
                    .block(block),
                area,
            );
            return;
        }

        let rows: Vec<Row> = self
            .users()
            .iter()
            .map(|user| {
                let joined = user
                    .created_at
                    .map(|at| at.format(&self.date_format).to_string())
                    .unwrap_or_else(|| "—".to_string());
                Row::new(vec![
                    user.name.clone(),
                    user.email.clone(),
                    user.task_count.to_string(),
                    user.completed_tasks.to_string(),
                    joined,
                ])
            })
            .collect();

        let header = Row::new(vec!["Name", "Email", "Tasks", "Done", "Joined"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_user_tasks(&self, f: &mut Frame, area: Rect) {
        let owner = self.user_tasks.as_ref().and_then(|(user_id, _)| {
            self.users()
                .iter()
                .find(|user| &user.id == user_id)
                .map(|user| user.name.clone())
        });
        let title = match &owner {
            Some(name) => format!(" Tasks of {} ", name),
            None => " Tasks (Enter on a user) ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(Color::White));

        match &self.user_tasks {
            Some((_, tasks)) if !tasks.is_empty() => {
                let items: Vec<ListItem> = tasks
                    .iter()
                    .map(|task| {
                        ListItem::new(Line::from(vec![
                            create_status_badge(task.completed),
                            Span::raw(" "),
                            create_priority_badge(&task.priority),
                            Span::raw(" "),
                            Span::raw(task.title.clone()),
                        ]))
                    })
                    .collect();
                f.render_widget(List::new(items).block(block), area);
            }
            Some(_) => {
                f.render_widget(
                    Paragraph::new("This user has no tasks")
                        .alignment(Alignment::Center)
                        .style(Style::default().fg(Color::Gray))
                        .block(block),
                    area,
                );
            }
            None => f.render_widget(block, area),
        }
    }
}

impl Component for AdminComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Enter => match self.selected_user() {
                Some(user) => Action::LoadUserTasks(user.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('n') => Action::ShowDialog(DialogType::CreateAdmin),
            KeyCode::Char('r') => Action::OpenAdmin,
            KeyCode::Char('b') | KeyCode::Esc => Action::Navigate(Screen::Dashboard),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                self.move_selection(true);
                Action::None
            }
            Action::PreviousItem => {
                self.move_selection(false);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (stats_area, users_area, tasks_area) = LayoutManager::admin_layout(rect);
        self.render_stats(f, stats_area);
        self.render_users(f, users_area);
        self.render_user_tasks(f, tasks_area);
    }
}
