//! Login screen

use super::{cycle_focus, ScreenAction};
use crate::fields::{EmailField, FieldEvent, ImeAction, PasswordField};
use crate::nav::NavOptions;
use crate::services::{Services, ValidationError};
use crate::types::Route;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Editing,
    Submitting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    LoginButton,
    SignupLink,
}

const FOCUS_ORDER: [LoginFocus; 4] = [
    LoginFocus::Email,
    LoginFocus::Password,
    LoginFocus::LoginButton,
    LoginFocus::SignupLink,
];

#[derive(Debug)]
pub struct LoginScreen {
    pub email: EmailField,
    pub password: PasswordField,
    pub focus: LoginFocus,
    pub state: LoginState,
    /// Inline feedback under the form
    pub message: Option<String>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            email: EmailField::default(),
            password: PasswordField::new("Password", ImeAction::Done),
            focus: LoginFocus::Email,
            state: LoginState::Editing,
            message: None,
        }
    }
}

impl LoginScreen {
    pub fn handle_key(&mut self, key: KeyEvent, services: &Services) -> ScreenAction {
        if self.state == LoginState::Done {
            return ScreenAction::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = cycle_focus(&FOCUS_ORDER, self.focus, true);
                return ScreenAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = cycle_focus(&FOCUS_ORDER, self.focus, false);
                return ScreenAction::None;
            }
            KeyCode::Esc => return ScreenAction::Back,
            _ => {}
        }

        let event = match self.focus {
            LoginFocus::Email => self.email.handle_key(key),
            LoginFocus::Password => self.password.handle_key(key),
            LoginFocus::LoginButton if key.code == KeyCode::Enter => {
                return self.submit(services);
            }
            LoginFocus::SignupLink if key.code == KeyCode::Enter => {
                return ScreenAction::Navigate(Route::Signup, NavOptions::default());
            }
            _ => FieldEvent::Ignored,
        };

        match event {
            FieldEvent::Changed(value) => {
                tracing::trace!(chars = value.chars().count(), "field edited");
                self.message = None;
            }
            FieldEvent::Next => self.focus = LoginFocus::Password,
            FieldEvent::Done => return self.submit(services),
            FieldEvent::Ignored => {}
        }
        ScreenAction::None
    }

    /// Click on a form element: focus it, and activate buttons and links
    pub fn tap(&mut self, target: LoginFocus, services: &Services) -> ScreenAction {
        if self.state == LoginState::Done {
            return ScreenAction::None;
        }
        self.focus = target;
        match target {
            LoginFocus::LoginButton | LoginFocus::SignupLink => {
                self.handle_key(KeyEvent::from(KeyCode::Enter), services)
            }
            LoginFocus::Email | LoginFocus::Password => ScreenAction::None,
        }
    }

    fn validate(&mut self) -> Result<(), ValidationError> {
        let email_ok = !self.email.value().trim().is_empty();
        let password_ok = !self.password.value().is_empty();
        self.email.state.is_valid = Some(email_ok);
        self.password.state.is_valid = Some(password_ok);

        if !email_ok {
            self.focus = LoginFocus::Email;
            return Err(ValidationError::EmptyEmail);
        }
        if !password_ok {
            self.focus = LoginFocus::Password;
            return Err(ValidationError::EmptyPassword);
        }
        Ok(())
    }

    /// Validate, then hand the credentials to the auth service
    pub fn submit(&mut self, services: &Services) -> ScreenAction {
        if let Err(e) = self.validate() {
            self.message = Some(e.to_string());
            return ScreenAction::None;
        }

        self.state = LoginState::Submitting;
        tracing::info!("login submitted");

        match services.auth.login(self.email.value(), self.password.value()) {
            Ok(session) => {
                self.state = LoginState::Done;
                self.message = None;
                ScreenAction::SignedIn(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.state = LoginState::Editing;
                self.message = Some(e.to_string());
                ScreenAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut LoginScreen, services: &Services, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), services);
        }
    }

    #[test]
    fn test_empty_submit_stays_editing() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();
        screen.focus = LoginFocus::LoginButton;

        assert_eq!(screen.handle_key(key(KeyCode::Enter), &services), ScreenAction::None);
        assert_eq!(screen.state, LoginState::Editing);
        assert_eq!(screen.message.as_deref(), Some("Enter your email address"));
        assert_eq!(screen.focus, LoginFocus::Email);
        assert_eq!(screen.email.state.is_valid, Some(false));
    }

    #[test]
    fn test_login_flow_reaches_done() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();

        type_str(&mut screen, &services, "me@crimicam.app");
        screen.handle_key(key(KeyCode::Enter), &services);
        assert_eq!(screen.focus, LoginFocus::Password);

        type_str(&mut screen, &services, "secret");
        let action = screen.handle_key(key(KeyCode::Enter), &services);

        match action {
            ScreenAction::SignedIn(session) => assert_eq!(session.email, "me@crimicam.app"),
            other => panic!("expected sign-in, got {:?}", other),
        }
        assert_eq!(screen.state, LoginState::Done);
    }

    #[test]
    fn test_signup_link() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();
        screen.handle_key(key(KeyCode::BackTab), &services);
        assert_eq!(screen.focus, LoginFocus::SignupLink);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &services),
            ScreenAction::Navigate(Route::Signup, NavOptions::default())
        );
    }

    #[test]
    fn test_typing_clears_message() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();
        screen.submit(&services);
        assert!(screen.message.is_some());
        type_str(&mut screen, &services, "a");
        assert!(screen.message.is_none());
    }

    #[test]
    fn test_tap_focuses_fields_and_follows_link() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();

        assert_eq!(screen.tap(LoginFocus::Password, &services), ScreenAction::None);
        assert_eq!(screen.focus, LoginFocus::Password);

        assert_eq!(
            screen.tap(LoginFocus::SignupLink, &services),
            ScreenAction::Navigate(Route::Signup, NavOptions::default())
        );
    }

    #[test]
    fn test_tap_button_submits() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();
        type_str(&mut screen, &services, "me@crimicam.app");
        screen.tap(LoginFocus::Password, &services);
        type_str(&mut screen, &services, "pw");

        let action = screen.tap(LoginFocus::LoginButton, &services);
        assert!(matches!(action, ScreenAction::SignedIn(_)));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_info_log_omits_email() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let services = Services::placeholder();
            let mut screen = LoginScreen::default();
            type_str(&mut screen, &services, "private@crimicam.app");
            screen.handle_key(key(KeyCode::Enter), &services);
            type_str(&mut screen, &services, "pw");
            screen.handle_key(key(KeyCode::Enter), &services);
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("login submitted"));
        assert!(!output.contains("private@crimicam.app"));
    }

    #[test]
    fn test_esc_is_back() {
        let services = Services::placeholder();
        let mut screen = LoginScreen::default();
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &services), ScreenAction::Back);
    }
}
