//! Core data types for crimicam
//!
//! Routes, feature descriptions and the small records passed between the
//! screens and the service layer.

use chrono::{DateTime, Local};
use ratatui::style::Color;

/// A named navigable screen target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Home,
}

impl Route {
    /// Route name as used in logs and the header
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Signup => "signup",
            Route::Home => "home",
        }
    }
}

/// App capabilities advertised on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Camera,
    Monitor,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Camera => "Camera",
            Feature::Monitor => "Monitor",
        }
    }
}

/// Small line-art shown in the background of a feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureGlyph {
    Camera,
    Monitor,
}

impl FeatureGlyph {
    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            FeatureGlyph::Camera => &[" ▄▄█▄▄▄ ", "█ (◉)  █", "▀▀▀▀▀▀▀▀"],
            FeatureGlyph::Monitor => &["┌──────┐", "│ ▁▃▅▇ │", "└──┬┬──┘"],
        }
    }
}

/// Everything needed to draw one feature card
#[derive(Debug, Clone)]
pub struct FeatureCardSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub glyph: FeatureGlyph,
    pub on_activate: Feature,
}

impl FeatureCardSpec {
    /// The two cards on the home dashboard, in display order
    pub fn home_cards() -> [FeatureCardSpec; 2] {
        [
            FeatureCardSpec {
                title: "Camera",
                description: "Access camera to capture intruders!",
                gradient_start: Color::Rgb(0x4A, 0x00, 0xE0),
                gradient_end: Color::Rgb(0x8E, 0x2D, 0xE2),
                glyph: FeatureGlyph::Camera,
                on_activate: Feature::Camera,
            },
            FeatureCardSpec {
                title: "Monitor",
                description: "Monitor captured media and surveillance",
                gradient_start: Color::Rgb(0x00, 0x83, 0xB0),
                gradient_end: Color::Rgb(0x00, 0xB4, 0xDB),
                glyph: FeatureGlyph::Monitor,
                on_activate: Feature::Monitor,
            },
        ]
    }
}

/// One row of the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub title: String,
    pub subtitle: String,
}

/// Signed-in user session returned by the auth service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub started_at: DateTime<Local>,
}

impl Session {
    pub fn formatted_start(&self) -> String {
        self.started_at.format("%d.%m.%y %H:%M").to_string()
    }
}

/// Newly created account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub created_at: DateTime<Local>,
}

/// Navigation drawer visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        *self == DrawerState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names() {
        let names: Vec<&str> = [Route::Login, Route::Signup, Route::Home]
            .iter()
            .map(|r| r.as_str())
            .collect();
        assert_eq!(names, vec!["login", "signup", "home"]);
    }

    #[test]
    fn test_home_cards_order() {
        let cards = FeatureCardSpec::home_cards();
        assert_eq!(cards[0].on_activate, Feature::Camera);
        assert_eq!(cards[1].on_activate, Feature::Monitor);
        assert_eq!(cards[0].gradient_start, Color::Rgb(0x4A, 0x00, 0xE0));
    }

    #[test]
    fn test_drawer_default_closed() {
        assert!(!DrawerState::default().is_open());
    }
}
