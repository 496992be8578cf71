//! Error types for the service layer and form validation

use thiserror::Error;

/// Login failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Wrong email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account is locked or suspended
    #[error("Account suspended: {0}")]
    AccountSuspended(String),

    /// Backend not reachable
    #[error("Network error: {0}")]
    Network(String),

    /// No auth backend is wired in
    #[error("Login is not available yet")]
    Unavailable,
}

/// Account creation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Password is too weak")]
    WeakPassword,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Sign up is not available yet")]
    Unavailable,
}

/// Field-level problems found before a form is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter your email address")]
    EmptyEmail,

    #[error("Enter your password")]
    EmptyPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
