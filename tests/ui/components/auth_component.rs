use crate::support::{ctrl, key, render_to_string};
use crossterm::event::KeyCode;
use taskdesk::ui::components::{AuthComponent, AuthMode};
use taskdesk::ui::core::{Action, Component, Screen};

fn type_text(auth: &mut AuthComponent, text: &str) {
    for c in text.chars() {
        auth.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_login_submit() {
    let mut auth = AuthComponent::new();
    type_text(&mut auth, " ann@example.com ");
    auth.handle_key_events(key(KeyCode::Tab));
    type_text(&mut auth, "secret");

    assert_eq!(
        auth.handle_key_events(key(KeyCode::Enter)),
        Action::Login {
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
        }
    );
    assert_eq!(auth.error(), None);
}

#[test]
fn test_login_missing_fields() {
    let mut auth = AuthComponent::new();
    type_text(&mut auth, "ann@example.com");
    assert_eq!(auth.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(auth.error(), Some("Please fill in all fields"));
}

#[test]
fn test_register_submit() {
    let mut auth = AuthComponent::new();
    auth.set_mode(AuthMode::Register);
    type_text(&mut auth, "Ann");
    auth.handle_key_events(key(KeyCode::Tab));
    type_text(&mut auth, "ann@example.com");
    auth.handle_key_events(key(KeyCode::Tab));
    type_text(&mut auth, "abc");

    // Too short
    assert_eq!(auth.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(auth.error().is_some());

    type_text(&mut auth, "def");
    assert_eq!(
        auth.handle_key_events(key(KeyCode::Enter)),
        Action::Register {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "abcdef".to_string(),
        }
    );
}

#[test]
fn test_google_mode() {
    let mut auth = AuthComponent::new();
    assert_eq!(auth.handle_key_events(ctrl('g')), Action::None);
    assert_eq!(auth.mode(), AuthMode::Google);

    assert_eq!(auth.handle_key_events(key(KeyCode::Enter)), Action::None);
    type_text(&mut auth, "id-token");
    assert_eq!(
        auth.handle_key_events(key(KeyCode::Enter)),
        Action::GoogleLogin {
            id_token: "id-token".to_string()
        }
    );

    // Esc goes back to the password form
    assert_eq!(auth.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert_eq!(auth.mode(), AuthMode::Login);
}

#[test]
fn test_navigation_keys() {
    let mut auth = AuthComponent::new();
    assert_eq!(auth.handle_key_events(ctrl('n')), Action::Navigate(Screen::Register));
    assert_eq!(auth.handle_key_events(ctrl('c')), Action::Quit);
    assert_eq!(auth.handle_key_events(key(KeyCode::Esc)), Action::Quit);

    auth.set_mode(AuthMode::Register);
    assert_eq!(auth.handle_key_events(key(KeyCode::Esc)), Action::Navigate(Screen::Login));
}

#[test]
fn test_notice_survives_mode_switch() {
    let mut auth = AuthComponent::new();
    auth.set_mode(AuthMode::Register);
    auth.set_notice("Account created");
    auth.set_mode(AuthMode::Login);
    assert_eq!(auth.notice(), Some("Account created"));

    auth.set_error("Invalid credentials");
    assert_eq!(auth.notice(), None);
    assert_eq!(auth.error(), Some("Invalid credentials"));
}

#[test]
fn test_reset_clears_input() {
    let mut auth = AuthComponent::new();
    type_text(&mut auth, "ann");
    auth.set_error("boom");
    auth.reset();
    assert_eq!(auth.form().value("Email"), "");
    assert_eq!(auth.error(), None);
}

#[test]
fn test_render_shows_title_and_error() {
    let mut auth = AuthComponent::new();
    auth.set_error("Invalid credentials");
    let screen = render_to_string(100, 30, |f, area| auth.render(f, area));
    assert!(screen.contains("Student Task Manager - Sign in"));
    assert!(screen.contains("Invalid credentials"));
    assert!(screen.contains("Email"));
}
