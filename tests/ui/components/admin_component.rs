use crate::support::{key, render_to_string, task};
use chrono::{TimeZone, Utc};
use crossterm::event::KeyCode;
use taskdesk::model::{PlatformStats, Priority, User};
use taskdesk::service::AdminDashboard;
use taskdesk::ui::components::AdminComponent;
use taskdesk::ui::core::{Action, Component, DialogType, Screen};

fn user(id: &str, name: &str, tasks: u64) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        task_count: tasks,
        completed_tasks: 0,
        created_at: Some(Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()),
    }
}

fn dashboard() -> AdminDashboard {
    AdminDashboard {
        stats: PlatformStats {
            total_users: 2,
            total_tasks: 7,
            completed_tasks: 3,
            pending_tasks: 4,
        },
        users: vec![user("u1", "Ann", 4), user("u2", "Bob", 3)],
    }
}

fn component() -> AdminComponent {
    let mut admin = AdminComponent::default();
    admin.set_dashboard(dashboard());
    admin
}

#[test]
fn test_enter_loads_selected_user_tasks() {
    let mut admin = component();
    assert_eq!(
        admin.handle_key_events(key(KeyCode::Enter)),
        Action::LoadUserTasks("u1".to_string())
    );

    admin.update(Action::NextItem);
    assert_eq!(
        admin.handle_key_events(key(KeyCode::Enter)),
        Action::LoadUserTasks("u2".to_string())
    );

    admin.update(Action::NextItem);
    assert_eq!(admin.selected_user().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn test_empty_panel_ignores_enter() {
    let mut admin = AdminComponent::default();
    assert_eq!(admin.handle_key_events(key(KeyCode::Enter)), Action::None);
    admin.update(Action::PreviousItem);
    assert!(admin.selected_user().is_none());
}

#[test]
fn test_panel_keys() {
    let mut admin = component();
    assert_eq!(
        admin.handle_key_events(key(KeyCode::Char('n'))),
        Action::ShowDialog(DialogType::CreateAdmin)
    );
    assert_eq!(admin.handle_key_events(key(KeyCode::Char('r'))), Action::OpenAdmin);
    assert_eq!(
        admin.handle_key_events(key(KeyCode::Char('b'))),
        Action::Navigate(Screen::Dashboard)
    );
    assert_eq!(admin.handle_key_events(key(KeyCode::Esc)), Action::Navigate(Screen::Dashboard));
}

#[test]
fn test_selection_clamped_on_reload() {
    let mut admin = component();
    admin.update(Action::NextItem);

    let mut smaller = dashboard();
    smaller.users.truncate(1);
    admin.set_dashboard(smaller);
    assert_eq!(admin.selected_user().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn test_clear_forgets_everything() {
    let mut admin = component();
    admin.set_user_tasks("u1".to_string(), Vec::new());
    admin.clear();
    assert!(admin.dashboard().is_none());
    assert!(admin.user_tasks().is_none());
}

#[test]
fn test_render_stats_users_and_tasks() {
    let mut admin = component();
    admin.set_user_tasks(
        "u1".to_string(),
        vec![task("t1", "Read chapter", false, Priority::High, None)],
    );

    let screen = render_to_string(160, 30, |f, area| admin.render(f, area));
    assert!(screen.contains("Users"));
    assert!(screen.contains("Bob"));
    assert!(screen.contains("2024-09-01"));
    assert!(screen.contains("Tasks of Ann"));
    assert!(screen.contains("Read chapter"));
}

#[test]
fn test_render_user_without_tasks() {
    let mut admin = component();
    admin.set_user_tasks("u2".to_string(), Vec::new());
    let screen = render_to_string(120, 30, |f, area| admin.render(f, area));
    assert!(screen.contains("This user has no tasks"));
}
