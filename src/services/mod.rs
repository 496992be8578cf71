//! Service layer
//!
//! The screens never talk to a backend directly. Everything beyond the UI
//! goes through these traits, bundled in `Services` and injected into the
//! `App`:
//! - Authentication (login, signup)
//! - Camera and monitor subsystems
//! - Recent activity feed

pub mod error;
pub mod placeholder;

pub use error::{AuthError, SignupError, ValidationError};

use crate::types::{Account, ActivityEntry, Session};

/// Account authentication
pub trait AuthService {
    fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    fn signup(&self, email: &str, password: &str) -> Result<Account, SignupError>;
}

/// Live camera capture
pub trait CameraSubsystem {
    fn open(&self) -> Result<(), String>;
}

/// Captured media and surveillance viewer
pub trait MonitorSubsystem {
    fn open(&self) -> Result<(), String>;
}

/// Source of the home screen's recent activity list
pub trait ActivityFeed {
    fn fetch_recent(&self, count: usize) -> Vec<ActivityEntry>;
}

/// All collaborators the shell calls out to
pub struct Services {
    pub auth: Box<dyn AuthService>,
    pub camera: Box<dyn CameraSubsystem>,
    pub monitor: Box<dyn MonitorSubsystem>,
    pub activity: Box<dyn ActivityFeed>,
}

impl Services {
    /// Services used until real backends exist
    pub fn placeholder() -> Self {
        Self {
            auth: Box::new(placeholder::PlaceholderAuth),
            camera: Box::new(placeholder::PlaceholderCamera),
            monitor: Box::new(placeholder::PlaceholderMonitor),
            activity: Box::new(placeholder::PlaceholderFeed),
        }
    }
}
