//! Application state and event handling
//!
//! This is the core of crimicam, managing:
//! - The navigator and the currently mounted screen
//! - Event handling (keyboard and mouse input)
//! - Deferred UI tasks and service calls requested by screens

use crate::config::Config;
use crate::nav::{NavOptions, Navigator};
use crate::screens::{Screen, ScreenAction};
use crate::services::Services;
use crate::tasks::{UiQueue, UiTask};
use crate::types::{Feature, Route, Session};
use crate::ui::{render, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// How long flash messages stay on screen
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub services: Services,

    // Navigation
    pub navigator: Navigator,
    pub screen: Screen,
    mounted_generation: u64,

    // Deferred UI work
    pub ui_queue: UiQueue,

    /// Signed-in session, shown in the drawer
    pub session: Option<Session>,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    /// Terminal area of the last frame, for mouse hit-testing
    pub viewport: Rect,
}

impl App {
    /// Create a new App instance starting on the login screen
    pub fn new(config: Config, services: Services) -> Self {
        let theme = Theme::from_name(config.theme);
        let navigator = Navigator::new(Route::Login, config.transition_ms());
        let screen = Screen::mount(navigator.current(), &services);
        let mounted_generation = navigator.mount_generation();

        Self {
            should_quit: false,
            config,
            theme,
            services,
            navigator,
            screen,
            mounted_generation,
            ui_queue: UiQueue::default(),
            session: None,
            flash_message: None,
            viewport: Rect::default(),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys (work on every screen)
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        let action = self.screen.handle_key(key, &self.services);
        if action != ScreenAction::None {
            tracing::debug!(route = self.screen.route().as_str(), ?action, "screen action");
        }
        self.apply(action);
    }

    /// Handle a mouse event; a left click is a tap on whatever lies under it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);
        let viewport = self.viewport;

        let action = match &mut self.screen {
            Screen::Login(login) => match render::login_hit(viewport, x, y) {
                Some(target) => login.tap(target, &self.services),
                None => ScreenAction::None,
            },
            Screen::Signup(signup) => match render::signup_hit(viewport, x, y) {
                Some(target) => signup.tap(target, &self.services),
                None => ScreenAction::None,
            },
            Screen::Home(home) if home.drawer.is_open() => {
                if render::hit(render::drawer_logout_area(viewport), x, y) {
                    home.close_drawer();
                    ScreenAction::SignOut
                } else {
                    if !render::hit(render::drawer_area(viewport), x, y) {
                        home.close_drawer();
                    }
                    ScreenAction::None
                }
            }
            Screen::Home(home) => {
                if render::hit(render::menu_icon_area(viewport), x, y) {
                    ScreenAction::Schedule(UiTask::OpenDrawer)
                } else if let Some(feature) = render::home_card_hit(viewport, home, x, y) {
                    home.tap_card(feature)
                } else {
                    ScreenAction::None
                }
            }
        };
        self.apply(action);
    }

    /// Per-frame housekeeping, run before drawing
    pub fn tick(&mut self, now: Instant) {
        self.run_pending_tasks();

        if let Some((_, _, shown_at)) = &self.flash_message {
            if now.saturating_duration_since(*shown_at) >= FLASH_DURATION {
                self.flash_message = None;
            }
        }

        self.navigator.transition_progress(now);

        let scroll_height = render::home_scroll_height(self.viewport);
        if let Screen::Home(home) = &mut self.screen {
            home.clamp_scroll(scroll_height);
        }
    }

    /// Run every queued UI task in order
    pub fn run_pending_tasks(&mut self) {
        for task in self.ui_queue.drain() {
            match task {
                UiTask::OpenDrawer => {
                    if let Screen::Home(home) = &mut self.screen {
                        home.open_drawer();
                    }
                }
            }
        }
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(route, options) => self.navigator.navigate(route, options),
            ScreenAction::Back => {
                self.navigator.pop_back_stack();
            }
            ScreenAction::SignedIn(session) => {
                tracing::info!("signed in");
                tracing::debug!(email = %session.email, "session started");
                self.session = Some(session);
                self.navigator
                    .navigate(Route::Home, NavOptions::pop_up_to(Route::Login, true));
            }
            ScreenAction::SignOut => {
                tracing::info!("signed out");
                self.session = None;
                self.navigator
                    .navigate(Route::Login, NavOptions::pop_up_to(Route::Home, true));
            }
            ScreenAction::OpenFeature(feature) => self.open_feature(feature),
            ScreenAction::Schedule(task) => self.ui_queue.schedule(task),
            ScreenAction::Quit => self.should_quit = true,
        }
        self.sync_screen();
    }

    fn open_feature(&mut self, feature: Feature) {
        let result = match feature {
            Feature::Camera => self.services.camera.open(),
            Feature::Monitor => self.services.monitor.open(),
        };
        match result {
            Ok(()) => self.flash(format!("Opened {}", feature.label()), false),
            Err(msg) => self.flash(msg, true),
        }
    }

    fn flash(&mut self, message: String, is_error: bool) {
        self.flash_message = Some((message, is_error, Instant::now()));
    }

    /// Mount a fresh screen whenever the navigator changed the current entry
    fn sync_screen(&mut self) {
        if self.navigator.mount_generation() == self.mounted_generation {
            return;
        }
        self.mounted_generation = self.navigator.mount_generation();
        self.ui_queue.clear();
        self.screen = Screen::mount(self.navigator.current(), &self.services);
    }

    #[cfg(test)]
    pub fn sign_in_for_test(&mut self) {
        self.apply(ScreenAction::SignedIn(Session {
            email: "tester@crimicam.app".to_string(),
            started_at: chrono::Local::now(),
        }));
    }
}
