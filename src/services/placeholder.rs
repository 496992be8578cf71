//! Stand-in services
//!
//! None of the backends exist yet. Login lets any non-empty credentials
//! through so the dashboard is reachable, everything else reports that it
//! is not available.

use super::{
    ActivityFeed, AuthError, AuthService, CameraSubsystem, MonitorSubsystem, SignupError,
};
use crate::types::{Account, ActivityEntry, Session};
use chrono::Local;

pub struct PlaceholderAuth;

impl AuthService for PlaceholderAuth {
    fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        tracing::debug!(email, "placeholder login accepted");
        Ok(Session {
            email: email.trim().to_string(),
            started_at: Local::now(),
        })
    }

    fn signup(&self, _email: &str, _password: &str) -> Result<Account, SignupError> {
        tracing::warn!("signup requested but no backend is wired in");
        Err(SignupError::Unavailable)
    }
}

pub struct PlaceholderCamera;

impl CameraSubsystem for PlaceholderCamera {
    fn open(&self) -> Result<(), String> {
        tracing::info!("camera subsystem requested");
        Err("Camera is not available yet".to_string())
    }
}

pub struct PlaceholderMonitor;

impl MonitorSubsystem for PlaceholderMonitor {
    fn open(&self) -> Result<(), String> {
        tracing::info!("monitor subsystem requested");
        Err("Monitor is not available yet".to_string())
    }
}

/// Repeats one sample alert
pub struct PlaceholderFeed;

impl ActivityFeed for PlaceholderFeed {
    fn fetch_recent(&self, count: usize) -> Vec<ActivityEntry> {
        (0..count)
            .map(|_| ActivityEntry {
                title: "Kawatan Alert: Caught lackin'".to_string(),
                subtitle: "Phone 1 • *Coordinates*".to_string(),
            })
            .collect()
    }
}
