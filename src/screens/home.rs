//! Home dashboard
//!
//! Feature cards, the recent activity list and the slide-in drawer.

use super::{cycle_focus, ScreenAction};
use crate::services::Services;
use crate::tasks::UiTask;
use crate::types::{ActivityEntry, DrawerState, Feature, FeatureCardSpec};
use crossterm::event::{KeyCode, KeyEvent};

/// Height of one feature card in rows
pub const CARD_HEIGHT: u16 = 7;
/// Rows taken by one activity entry, divider included
pub const ACTIVITY_ROW_HEIGHT: u16 = 3;
/// Entries shown under "Recent Activity"
pub const RECENT_ACTIVITY_COUNT: usize = 5;

const CARD_ORDER: [Feature; 2] = [Feature::Camera, Feature::Monitor];

#[derive(Debug)]
pub struct HomeScreen {
    pub drawer: DrawerState,
    pub scroll: u16,
    pub focused_card: Feature,
    pub cards: [FeatureCardSpec; 2],
    pub activity: Vec<ActivityEntry>,
}

impl HomeScreen {
    pub fn new(services: &Services) -> Self {
        let mut activity = services.activity.fetch_recent(RECENT_ACTIVITY_COUNT);
        activity.truncate(RECENT_ACTIVITY_COUNT);

        Self {
            drawer: DrawerState::Closed,
            scroll: 0,
            focused_card: Feature::Camera,
            cards: FeatureCardSpec::home_cards(),
            activity,
        }
    }

    /// Activity rows paired with whether a divider follows them
    pub fn activity_rows(&self) -> impl Iterator<Item = (&ActivityEntry, bool)> {
        let last = self.activity.len().saturating_sub(1);
        self.activity
            .iter()
            .enumerate()
            .map(move |(i, entry)| (entry, i < last))
    }

    /// Rows needed to draw the scrollable body
    pub fn content_height(&self) -> u16 {
        // spacer, cards with gaps, spacer, heading, activity rows
        let cards = self.cards.len() as u16 * (CARD_HEIGHT + 1);
        1 + cards + 1 + 2 + self.activity.len() as u16 * ACTIVITY_ROW_HEIGHT
    }

    pub fn open_drawer(&mut self) {
        if !self.drawer.is_open() {
            tracing::debug!("drawer opened");
        }
        self.drawer = DrawerState::Open;
    }

    pub fn close_drawer(&mut self) {
        if self.drawer.is_open() {
            tracing::debug!("drawer closed");
        }
        self.drawer = DrawerState::Closed;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if self.drawer.is_open() {
            return match key.code {
                KeyCode::Enter => {
                    self.close_drawer();
                    ScreenAction::SignOut
                }
                _ => {
                    self.close_drawer();
                    ScreenAction::None
                }
            };
        }

        match key.code {
            KeyCode::Char('m') => return ScreenAction::Schedule(UiTask::OpenDrawer),
            KeyCode::Char('q') => return ScreenAction::Quit,
            KeyCode::Esc => return ScreenAction::Back,
            KeyCode::Char('j') | KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(CARD_HEIGHT),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(CARD_HEIGHT),
            KeyCode::Char('g') | KeyCode::Home => self.scroll = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll = self.content_height(),
            KeyCode::Tab => self.focused_card = cycle_focus(&CARD_ORDER, self.focused_card, true),
            KeyCode::BackTab => {
                self.focused_card = cycle_focus(&CARD_ORDER, self.focused_card, false)
            }
            KeyCode::Enter => return ScreenAction::OpenFeature(self.focused_card),
            _ => {}
        }
        ScreenAction::None
    }

    /// Click on a feature card
    pub fn tap_card(&mut self, feature: Feature) -> ScreenAction {
        self.focused_card = feature;
        ScreenAction::OpenFeature(feature)
    }

    /// Clamp the scroll offset to what fits in a viewport of `height` rows
    pub fn clamp_scroll(&mut self, height: u16) {
        let max = self.content_height().saturating_sub(height);
        self.scroll = self.scroll.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ActivityFeed;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn home() -> HomeScreen {
        HomeScreen::new(&Services::placeholder())
    }

    #[test]
    fn test_five_rows_last_without_divider() {
        let screen = home();
        let dividers: Vec<bool> = screen.activity_rows().map(|(_, d)| d).collect();
        assert_eq!(dividers, vec![true, true, true, true, false]);
    }

    struct FloodFeed;

    impl ActivityFeed for FloodFeed {
        fn fetch_recent(&self, _: usize) -> Vec<ActivityEntry> {
            vec![
                ActivityEntry {
                    title: "Motion".to_string(),
                    subtitle: "Phone 2".to_string(),
                };
                30_000
            ]
        }
    }

    #[test]
    fn test_activity_capped_at_five() {
        let mut services = Services::placeholder();
        services.activity = Box::new(FloodFeed);
        let mut screen = HomeScreen::new(&services);
        assert_eq!(screen.activity.len(), RECENT_ACTIVITY_COUNT);

        screen.handle_key(key(KeyCode::Char('G')));
        screen.clamp_scroll(20);
        assert_eq!(screen.scroll, screen.content_height() - 20);
    }

    #[test]
    fn test_menu_is_deferred() {
        let mut screen = home();
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('m'))),
            ScreenAction::Schedule(UiTask::OpenDrawer)
        );
        assert!(!screen.drawer.is_open());
    }

    #[test]
    fn test_drawer_open_idempotent_and_closes() {
        let mut screen = home();
        screen.open_drawer();
        screen.open_drawer();
        assert_eq!(screen.drawer, DrawerState::Open);

        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenAction::None);
        assert_eq!(screen.drawer, DrawerState::Closed);
    }

    #[test]
    fn test_drawer_logout() {
        let mut screen = home();
        screen.open_drawer();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::SignOut);
        assert!(!screen.drawer.is_open());
    }

    #[test]
    fn test_card_activation() {
        let mut screen = home();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenAction::OpenFeature(Feature::Camera)
        );
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenAction::OpenFeature(Feature::Monitor)
        );
    }

    #[test]
    fn test_scroll_clamped() {
        let mut screen = home();
        screen.handle_key(key(KeyCode::Char('G')));
        screen.clamp_scroll(10);
        assert_eq!(screen.scroll, screen.content_height() - 10);

        screen.clamp_scroll(500);
        assert_eq!(screen.scroll, 0);
        screen.handle_key(key(KeyCode::Char('k')));
        assert_eq!(screen.scroll, 0);
    }
}
