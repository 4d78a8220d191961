use crate::support::{key, render_to_string, task};
use crossterm::event::KeyCode;
use taskdesk::config::{DisplayConfig, UiConfig};
use taskdesk::constants::{EMPTY_NO_MATCH, EMPTY_NO_TASKS};
use taskdesk::model::{Priority, Task};
use taskdesk::projection::{SortBy, TaskFilter};
use taskdesk::session::Claims;
use taskdesk::ui::components::TaskListComponent;
use taskdesk::ui::core::{Action, Component, DialogType};

fn tasks() -> Vec<Task> {
    vec![
        task("1", "Read chapter", false, Priority::Low, Some((2025, 1, 1))),
        task("2", "Submit essay", true, Priority::High, Some((2025, 2, 1))),
        task("3", "Lab prep", false, Priority::Medium, Some((2025, 1, 15))),
    ]
}

fn component() -> TaskListComponent {
    let mut list = TaskListComponent::default();
    list.set_tasks(tasks());
    list
}

fn selected(list: &TaskListComponent) -> Option<&str> {
    list.selected_task().map(|t| t.id.as_str())
}

#[test]
fn test_defaults_come_from_config() {
    let ui = UiConfig {
        default_filter: TaskFilter::Pending,
        default_sort: SortBy::Priority,
        ..UiConfig::default()
    };
    let mut list = TaskListComponent::new(&ui, DisplayConfig::default());
    list.set_tasks(tasks());

    assert_eq!(list.filter(), TaskFilter::Pending);
    let ids: Vec<&str> = list.view().tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);
}

#[test]
fn test_newest_first_by_default() {
    let list = component();
    assert_eq!(selected(&list), Some("2"));
    assert_eq!(list.view().stats.total, 3);
    assert_eq!(list.view().stats.completed, 1);
}

#[test]
fn test_filter_cycles_and_reports() {
    let mut list = component();
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('f'))),
        Action::SetStatus("Filter: Completed".to_string())
    );
    assert_eq!(list.view().tasks.len(), 1);
    // Stats always describe the whole collection
    assert_eq!(list.view().stats.total, 3);

    list.handle_key_events(key(KeyCode::Char('f')));
    assert_eq!(list.filter(), TaskFilter::Pending);
    assert_eq!(list.view().tasks.len(), 2);
}

#[test]
fn test_sort_cycles_and_reports() {
    let mut list = component();
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('s'))),
        Action::SetStatus("Sort: Oldest".to_string())
    );
    assert_eq!(selected(&list), Some("1"));

    list.set_sort(SortBy::Priority);
    assert_eq!(list.view().tasks[0].id, "2");
}

#[test]
fn test_navigation_wraps() {
    let mut list = component();
    assert_eq!(list.handle_key_events(key(KeyCode::Char('j'))), Action::NextItem);

    list.update(Action::NextItem);
    assert_eq!(selected(&list), Some("3"));
    list.update(Action::NextItem);
    list.update(Action::NextItem);
    assert_eq!(selected(&list), Some("2"));
    list.update(Action::PreviousItem);
    assert_eq!(selected(&list), Some("1"));
    assert_eq!(list.list_state.selected(), Some(2));
}

#[test]
fn test_selection_is_clamped_when_view_shrinks() {
    let mut list = component();
    list.selected_index = 2;
    list.set_filter(TaskFilter::Completed);
    assert_eq!(list.selected_index, 0);
    assert_eq!(selected(&list), Some("2"));
}

#[test]
fn test_task_actions() {
    let mut list = component();
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char(' '))),
        Action::ToggleTask("2".to_string())
    );
    assert_eq!(list.handle_key_events(key(KeyCode::Char('e'))), Action::EditTask("2".to_string()));
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::ShowDialog(DialogType::DeleteConfirmation {
            task_id: "2".to_string(),
            title: "Submit essay".to_string(),
        })
    );
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('a'))),
        Action::ShowDialog(DialogType::TaskCreation)
    );
    assert_eq!(list.handle_key_events(key(KeyCode::Char('r'))), Action::LoadTasks);
}

#[test]
fn test_empty_list_has_no_task_actions() {
    let mut list = TaskListComponent::default();
    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None);
    assert_eq!(list.list_state.selected(), None);
}

#[test]
fn test_render_lists_tasks_and_stats() {
    let mut list = component();
    list.set_claims(Some(Claims {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        is_admin: true,
    }));

    let screen = render_to_string(120, 24, |f, area| list.render(f, area));
    assert!(screen.contains("Welcome, Ann"));
    assert!(screen.contains("[admin: press A]"));
    assert!(screen.contains("Submit essay"));
    assert!(screen.contains("Completed"));
    assert!(screen.contains("Showing 3 of 3"));
}

#[test]
fn test_render_empty_messages() {
    let mut list = TaskListComponent::default();
    list.set_loading(true);
    let screen = render_to_string(120, 20, |f, area| list.render(f, area));
    assert!(screen.contains("Loading tasks..."));

    list.set_tasks(Vec::new());
    let screen = render_to_string(120, 20, |f, area| list.render(f, area));
    assert!(screen.contains(EMPTY_NO_TASKS));

    list.set_tasks(vec![task("1", "Read", false, Priority::Low, None)]);
    list.set_filter(TaskFilter::Completed);
    let screen = render_to_string(120, 20, |f, area| list.render(f, area));
    assert!(screen.contains(EMPTY_NO_MATCH));
}
