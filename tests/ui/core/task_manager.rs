use std::time::Duration;
use taskdesk::api::ApiError;
use taskdesk::constants::ERROR_ADMIN_ONLY;
use taskdesk::session::SessionError;
use taskdesk::ui::core::{error_action, Action, DialogType, TaskManager};
use taskdesk::validation::ValidationError;

#[test]
fn test_missing_session_expires() {
    let error = anyhow::Error::new(SessionError::NotAuthenticated);
    assert!(matches!(error_action("Loading", &error), Action::SessionExpired(_)));

    let error = anyhow::Error::new(SessionError::InvalidToken);
    assert!(matches!(error_action("Loading", &error), Action::SessionExpired(_)));
}

#[test]
fn test_not_admin_is_reported() {
    let error = anyhow::Error::new(SessionError::NotAdmin);
    assert_eq!(
        error_action("Admin", &error),
        Action::ShowDialog(DialogType::Error(ERROR_ADMIN_ONLY.to_string()))
    );
}

#[test]
fn test_result_of_ended_session_is_dropped() {
    let error = anyhow::Error::new(SessionError::Superseded);
    assert_eq!(error_action("Loading", &error), Action::None);
}

#[test]
fn test_rejected_token_expires() {
    let error = anyhow::Error::new(ApiError::Status {
        status: 401,
        message: "Invalid token".to_string(),
    });
    assert_eq!(error_action("Loading", &error), Action::SessionExpired("Invalid token".to_string()));
}

#[test]
fn test_api_failure_shows_context() {
    let error = anyhow::Error::new(ApiError::Status {
        status: 500,
        message: "Server error".to_string(),
    });
    assert_eq!(
        error_action("Failed to delete", &error),
        Action::ShowDialog(DialogType::Error("Failed to delete\n\nServer error".to_string()))
    );
}

#[test]
fn test_validation_failure_shows_message() {
    let error = anyhow::Error::new(ValidationError::MissingTitle);
    assert_eq!(
        error_action("Create", &error),
        Action::ShowDialog(DialogType::Error("Please enter a task title".to_string()))
    );
}

#[test]
fn test_other_failures_show_context() {
    let error = anyhow::anyhow!("disk full");
    assert_eq!(
        error_action("Saving", &error),
        Action::ShowDialog(DialogType::Error("Saving\n\ndisk full".to_string()))
    );
}

#[tokio::test]
async fn test_operation_result_is_delivered() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_operation("Loading tasks", "Failed", || async { Ok(Action::LoadTasks) });
    assert_eq!(manager.task_count(), 1);

    let action = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert_eq!(action, Some(Action::LoadTasks));
}

#[tokio::test]
async fn test_operation_failure_is_routed() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_operation("Saving", "Failed to save", || async {
        Err(anyhow::Error::new(SessionError::NotAuthenticated))
    });

    let action = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert!(matches!(action, Some(Action::SessionExpired(_))));
}

#[tokio::test]
async fn test_finished_operations_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_operation("Quick", "Failed", || async { Ok(Action::None) });
    let _ = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await.unwrap();

    for _ in 0..100 {
        manager.cleanup_finished_tasks();
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(manager.task_count(), 0);
    assert!(manager.current_activity().is_none());
}

#[tokio::test]
async fn test_current_activity_reports_running_operation() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_operation("Slow", "Failed", || async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(Action::None)
    });
    assert_eq!(manager.current_activity(), Some("Slow"));
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
