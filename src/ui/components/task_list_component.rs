use crate::config::{DisplayConfig, UiConfig};
use crate::constants::{APP_TITLE, EMPTY_NO_MATCH, EMPTY_NO_TASKS};
use crate::model::Task;
use crate::projection::{self, SortBy, TaskFilter, TaskView};
use crate::session::Claims;
use crate::ui::components::badge::{create_paren_badge, create_priority_badge, create_status_badge};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// The dashboard: quick stats, the active filter and sort, and the
/// projected task list.
pub struct TaskListComponent {
    tasks: Vec<Task>,
    view: TaskView,
    filter: TaskFilter,
    sort_by: SortBy,
    pub selected_index: usize,
    pub list_state: ListState,
    claims: Option<Claims>,
    loading: bool,
    display: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new(&UiConfig::default(), DisplayConfig::default())
    }
}

impl TaskListComponent {
    pub fn new(ui: &UiConfig, display: DisplayConfig) -> Self {
        Self {
            tasks: Vec::new(),
            view: TaskView::default(),
            filter: ui.default_filter,
            sort_by: ui.default_sort,
            selected_index: 0,
            list_state: ListState::default(),
            claims: None,
            loading: false,
            display,
        }
    }

    /// Replace the task set and re-project it
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
        self.refresh_view();
    }

    pub fn set_claims(&mut self, claims: Option<Claims>) {
        self.claims = claims;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        self.refresh_view();
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.refresh_view();
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn view(&self) -> &TaskView {
        &self.view
    }

    pub fn clear(&mut self) {
        self.claims = None;
        self.set_tasks(Vec::new());
    }

    /// Task under the cursor, in projected order
    pub fn selected_task(&self) -> Option<&Task> {
        self.view.tasks.get(self.selected_index)
    }

    fn refresh_view(&mut self) {
        self.view = projection::project(&self.tasks, self.filter, self.sort_by);
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.view.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.view.tasks.len() {
                self.selected_index = self.view.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn next_task(&mut self) {
        if !self.view.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.view.tasks.len();
            self.update_list_state();
        }
    }

    fn previous_task(&mut self) {
        if !self.view.tasks.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.view.tasks.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_task().map(|task| task.id.clone())
    }

    fn task_item(&self, task: &Task) -> ListItem<'static> {
        let title_style = if task.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            create_status_badge(task.completed),
            Span::raw(" "),
            create_priority_badge(&task.priority),
            Span::raw(" "),
            Span::styled(task.title.clone(), title_style),
            Span::raw(" "),
            create_paren_badge(&datetime::format_due(task.due_date.as_ref(), &self.display.date_format)),
        ];
        if let Some(day) = task.due_day() {
            spans.push(Span::styled(
                format!(" {}", datetime::format_human_date(day)),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if self.display.show_descriptions && !task.description_text().trim().is_empty() {
            lines.push(Line::from(Span::styled(
                format!("      {}", task.description_text().trim()),
                Style::default().fg(Color::Gray),
            )));
        }
        ListItem::new(lines)
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(claims) = &self.claims {
            let name = if claims.name.is_empty() { &claims.email } else { &claims.name };
            spans.push(Span::styled(format!("  Welcome, {}", name), Style::default().fg(Color::White)));
            if claims.is_admin {
                spans.push(Span::styled(
                    "  [admin: press A]",
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ));
            }
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(header, area);
    }

    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let stats = self.view.stats;
        let boxes = [
            ("Total", stats.total, Color::Cyan),
            ("Completed", stats.completed, Color::Green),
            ("Pending", stats.pending, Color::Yellow),
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

    fn render_controls(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::Gray)),
            Span::styled(self.filter.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(" (f)", Style::default().fg(Color::DarkGray)),
            Span::styled("  •  Sort: ", Style::default().fg(Color::Gray)),
            Span::styled(self.sort_by.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(" (s)", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  •  Showing {} of {}", self.view.tasks.len(), self.view.stats.total),
                Style::default().fg(Color::Gray),
            ),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char(' ') => self.selected_id().map(Action::ToggleTask).unwrap_or(Action::None),
            KeyCode::Char('e') | KeyCode::Enter => self.selected_id().map(Action::EditTask).unwrap_or(Action::None),
            KeyCode::Char('d') => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Char('f') => {
                self.set_filter(self.filter.next());
                Action::SetStatus(format!("Filter: {}", self.filter))
            }
            KeyCode::Char('s') => {
                self.set_sort(self.sort_by.next());
                Action::SetStatus(format!("Sort: {}", self.sort_by))
            }
            KeyCode::Char('r') => Action::LoadTasks,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                self.next_task();
                Action::None
            }
            Action::PreviousItem => {
                self.previous_task();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::dashboard_layout(rect);
        self.render_header(f, chunks[0]);
        self.render_stats(f, chunks[1]);
        self.render_controls(f, chunks[2]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Tasks ")
            .style(Style::default().fg(Color::White));

        if self.view.tasks.is_empty() {
            let message = if self.loading {
                "Loading tasks..."
            } else if self.tasks.is_empty() {
                EMPTY_NO_TASKS
            } else {
                EMPTY_NO_MATCH
            };
            let empty = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, chunks[3]);
            return;
        }

        let items: Vec<ListItem> = self.view.tasks.iter().map(|task| self.task_item(task)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, chunks[3], &mut self.list_state);
    }
}
