//! Screens
//!
//! One screen instance exists per mounted route. Screens own only their
//! transient UI state and report what should happen next as a
//! `ScreenAction`; the `App` carries the action out.

pub mod home;
pub mod login;
pub mod signup;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use signup::SignupScreen;

use crate::nav::NavOptions;
use crate::services::Services;
use crate::tasks::UiTask;
use crate::types::{Feature, Route, Session};
use crossterm::event::KeyEvent;

/// Result of handling one input event on a screen
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    None,
    Navigate(Route, NavOptions),
    /// System back
    Back,
    SignedIn(Session),
    SignOut,
    OpenFeature(Feature),
    Schedule(UiTask),
    Quit,
}

/// The mounted screen
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Signup(SignupScreen),
    Home(HomeScreen),
}

impl Screen {
    /// Create a fresh instance for `route`
    pub fn mount(route: Route, services: &Services) -> Self {
        tracing::debug!(route = route.as_str(), "mounting screen");
        match route {
            Route::Login => Screen::Login(LoginScreen::default()),
            Route::Signup => Screen::Signup(SignupScreen::default()),
            Route::Home => Screen::Home(HomeScreen::new(services)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Signup(_) => Route::Signup,
            Screen::Home(_) => Route::Home,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, services: &Services) -> ScreenAction {
        match self {
            Screen::Login(screen) => screen.handle_key(key, services),
            Screen::Signup(screen) => screen.handle_key(key, services),
            Screen::Home(screen) => screen.handle_key(key),
        }
    }

    /// Key hints for the footer
    pub fn hints(&self) -> &'static str {
        match self {
            Screen::Login(_) | Screen::Signup(_) => {
                "[Tab] Next  [Enter] Select  [Ctrl+R] Show/Hide Password  [Esc] Back  [Ctrl+C] Quit"
            }
            Screen::Home(screen) if screen.drawer.is_open() => {
                "[Enter] Log out  [Esc] Close menu  [Ctrl+C] Quit"
            }
            Screen::Home(_) => "[j/k] Scroll  [Tab] Switch Card  [Enter] Open  [m] Menu  [q] Quit",
        }
    }
}

/// Move focus one step through `order`, wrapping at both ends
pub fn cycle_focus<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let len = order.len();
    if len == 0 {
        return current;
    }
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    order[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_focus_wraps() {
        let order = [1, 2, 3];
        assert_eq!(cycle_focus(&order, 3, true), 1);
        assert_eq!(cycle_focus(&order, 1, false), 3);
        assert_eq!(cycle_focus(&order, 2, true), 3);
    }

    #[test]
    fn test_mount_matches_route() {
        let services = Services::placeholder();
        for route in [Route::Login, Route::Signup, Route::Home] {
            assert_eq!(Screen::mount(route, &services).route(), route);
        }
    }
}
