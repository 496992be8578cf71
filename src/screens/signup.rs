//! Signup screen

use super::{cycle_focus, ScreenAction};
use crate::fields::{EmailField, FieldEvent, ImeAction, PasswordField};
use crate::services::{Services, ValidationError};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFocus {
    Email,
    Password,
    ConfirmPassword,
    SignupButton,
    LoginLink,
}

const FOCUS_ORDER: [SignupFocus; 5] = [
    SignupFocus::Email,
    SignupFocus::Password,
    SignupFocus::ConfirmPassword,
    SignupFocus::SignupButton,
    SignupFocus::LoginLink,
];

/// Outcome shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupMessage {
    Error(String),
    Success(String),
}

#[derive(Debug)]
pub struct SignupScreen {
    pub email: EmailField,
    pub password: PasswordField,
    pub confirm_password: PasswordField,
    pub focus: SignupFocus,
    pub message: Option<SignupMessage>,
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self {
            email: EmailField::default(),
            password: PasswordField::new("Password", ImeAction::Next),
            confirm_password: PasswordField::new("Confirm Password", ImeAction::Done),
            focus: SignupFocus::Email,
            message: None,
        }
    }
}

impl SignupScreen {
    pub fn handle_key(&mut self, key: KeyEvent, services: &Services) -> ScreenAction {
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
            SignupFocus::Email => self.email.handle_key(key),
            SignupFocus::Password => self.password.handle_key(key),
            SignupFocus::ConfirmPassword => self.confirm_password.handle_key(key),
            SignupFocus::SignupButton if key.code == KeyCode::Enter => {
                self.submit(services);
                return ScreenAction::None;
            }
            SignupFocus::LoginLink if key.code == KeyCode::Enter => return ScreenAction::Back,
            _ => FieldEvent::Ignored,
        };

        match event {
            FieldEvent::Changed(value) => {
                tracing::trace!(chars = value.chars().count(), "field edited");
                self.message = None;
            }
            FieldEvent::Next => self.focus = cycle_focus(&FOCUS_ORDER, self.focus, true),
            FieldEvent::Done => self.submit(services),
            FieldEvent::Ignored => {}
        }
        ScreenAction::None
    }

    /// Click on a form element: focus it, and activate buttons and links
    pub fn tap(&mut self, target: SignupFocus, services: &Services) -> ScreenAction {
        self.focus = target;
        match target {
            SignupFocus::SignupButton | SignupFocus::LoginLink => {
                self.handle_key(KeyEvent::from(KeyCode::Enter), services)
            }
            _ => ScreenAction::None,
        }
    }

    fn validate(&mut self) -> Result<(), ValidationError> {
        let email_ok = !self.email.value().trim().is_empty();
        let password_ok = !self.password.value().is_empty();
        let confirm_ok = self.confirm_password.value() == self.password.value();

        self.email.state.is_valid = Some(email_ok);
        self.password.state.is_valid = Some(password_ok);
        self.confirm_password.state.is_valid = Some(confirm_ok);

        if !email_ok {
            self.focus = SignupFocus::Email;
            Err(ValidationError::EmptyEmail)
        } else if !password_ok {
            self.focus = SignupFocus::Password;
            Err(ValidationError::EmptyPassword)
        } else if !confirm_ok {
            self.focus = SignupFocus::ConfirmPassword;
            Err(ValidationError::PasswordMismatch)
        } else {
            Ok(())
        }
    }

    /// Validate and pass the new account to the auth service
    pub fn submit(&mut self, services: &Services) {
        if let Err(e) = self.validate() {
            self.message = Some(SignupMessage::Error(e.to_string()));
            return;
        }

        tracing::info!("signup submitted");
        self.message = Some(
            match services.auth.signup(self.email.value(), self.password.value()) {
                Ok(account) => {
                    SignupMessage::Success(format!("Account created for {}", account.email))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "signup failed");
                    SignupMessage::Error(e.to_string())
                }
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AuthError, AuthService, SignupError};
    use crate::types::{Account, Session};
    use chrono::Local;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(screen: &mut SignupScreen, services: &Services, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), services);
        }
    }

    fn fill(screen: &mut SignupScreen, services: &Services, password: &str, confirm: &str) {
        type_str(screen, services, "new@crimicam.app");
        screen.handle_key(key(KeyCode::Enter), services);
        type_str(screen, services, password);
        screen.handle_key(key(KeyCode::Enter), services);
        type_str(screen, services, confirm);
    }

    struct AcceptingAuth;

    impl AuthService for AcceptingAuth {
        fn login(&self, _: &str, _: &str) -> Result<Session, AuthError> {
            Err(AuthError::Unavailable)
        }

        fn signup(&self, email: &str, _: &str) -> Result<Account, SignupError> {
            Ok(Account {
                email: email.to_string(),
                created_at: Local::now(),
            })
        }
    }

    #[test]
    fn test_enter_walks_through_fields() {
        let services = Services::placeholder();
        let mut screen = SignupScreen::default();
        screen.handle_key(key(KeyCode::Enter), &services);
        assert_eq!(screen.focus, SignupFocus::Password);
        screen.handle_key(key(KeyCode::Enter), &services);
        assert_eq!(screen.focus, SignupFocus::ConfirmPassword);
    }

    #[test]
    fn test_password_mismatch() {
        let services = Services::placeholder();
        let mut screen = SignupScreen::default();
        fill(&mut screen, &services, "abc", "abd");
        screen.handle_key(key(KeyCode::Enter), &services);

        assert_eq!(
            screen.message,
            Some(SignupMessage::Error("Passwords do not match".into()))
        );
        assert_eq!(screen.confirm_password.state.is_valid, Some(false));
    }

    #[test]
    fn test_placeholder_signup_reports_unavailable() {
        let services = Services::placeholder();
        let mut screen = SignupScreen::default();
        fill(&mut screen, &services, "abc", "abc");
        screen.handle_key(key(KeyCode::Enter), &services);

        assert_eq!(
            screen.message,
            Some(SignupMessage::Error("Sign up is not available yet".into()))
        );
    }

    #[test]
    fn test_signup_success_message() {
        let mut services = Services::placeholder();
        services.auth = Box::new(AcceptingAuth);
        let mut screen = SignupScreen::default();
        fill(&mut screen, &services, "abc", "abc");
        screen.submit(&services);

        assert_eq!(
            screen.message,
            Some(SignupMessage::Success("Account created for new@crimicam.app".into()))
        );
    }

    #[test]
    fn test_password_fields_independent() {
        let services = Services::placeholder();
        let mut screen = SignupScreen::default();
        fill(&mut screen, &services, "one", "two");
        assert_eq!(screen.password.value(), "one");
        assert_eq!(screen.confirm_password.value(), "two");
    }

    #[test]
    fn test_tap_confirm_field_and_button() {
        let services = Services::placeholder();
        let mut screen = SignupScreen::default();
        assert_eq!(screen.tap(SignupFocus::ConfirmPassword, &services), ScreenAction::None);
        assert_eq!(screen.focus, SignupFocus::ConfirmPassword);

        screen.tap(SignupFocus::SignupButton, &services);
        assert_eq!(
            screen.message,
            Some(SignupMessage::Error("Enter your email address".into()))
        );
    }

    #[test]
    fn test_login_link_goes_back() {
        let services = Services::placeholder();
        let mut screen = SignupScreen::default();
        screen.focus = SignupFocus::LoginLink;
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &services), ScreenAction::Back);
    }
}
