//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Status bar and navigation bar (system chrome)
//! - The mounted screen
//! - Drawer overlay, transition fade and flash messages

use crate::app::App;
use crate::screens::home::{HomeScreen, ACTIVITY_ROW_HEIGHT, CARD_HEIGHT};
use crate::screens::login::{LoginFocus, LoginScreen};
use crate::screens::signup::{SignupFocus, SignupMessage, SignupScreen};
use crate::screens::Screen;
use crate::types::{Feature, FeatureGlyph};
use crate::ui::theme::{SystemBars, Theme};
use crate::ui::widgets::{self, FeatureCard, GradientButton, RecentActivityItem, DRAWER_LOGOUT_ROW};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::rc::Rc;
use std::time::Instant;

/// Widest the login/signup forms grow
const FORM_WIDTH: u16 = 56;
/// Rows of the home header (logo, title, menu)
const HOME_HEADER_HEIGHT: u16 = 3;

const LOGIN_GRADIENT: (Color, Color) =
    (Color::Rgb(0x48, 0x4B, 0xF1), Color::Rgb(0x67, 0x3A, 0xB7));

/// Split the terminal into status bar, body and navigation bar
pub fn chrome_layout(area: Rect) -> (Rect, Rect, Rect) {
    let layout = Layout::vertical([
        Constraint::Length(1), // Status bar
        Constraint::Min(1),    // Screen
        Constraint::Length(1), // Navigation bar
    ])
    .split(area);
    (layout[0], layout[1], layout[2])
}

/// Area covered by the open drawer
pub fn drawer_area(area: Rect) -> Rect {
    let (_, body, _) = chrome_layout(area);
    Rect {
        width: (body.width as u32 * 8 / 10) as u16,
        ..body
    }
}

/// Clickable menu icon in the home header
pub fn menu_icon_area(area: Rect) -> Rect {
    let (_, body, _) = chrome_layout(area);
    Rect {
        x: body.x + body.width.saturating_sub(5),
        y: body.y,
        width: 5.min(body.width),
        height: HOME_HEADER_HEIGHT.min(body.height),
    }
}

/// Rows available to the scrolling part of the home screen
pub fn home_scroll_height(area: Rect) -> u16 {
    let (_, body, _) = chrome_layout(area);
    body.height.saturating_sub(HOME_HEADER_HEIGHT)
}

/// Whether the cell at (`x`, `y`) lies inside `area`
pub fn hit(area: Rect, x: u16, y: u16) -> bool {
    x >= area.left() && x < area.right() && y >= area.top() && y < area.bottom()
}

/// Row of the drawer holding the "Log out" entry
pub fn drawer_logout_area(area: Rect) -> Rect {
    let drawer = drawer_area(area);
    Rect {
        y: drawer.y + DRAWER_LOGOUT_ROW.min(drawer.height.saturating_sub(1)),
        width: drawer.width.saturating_sub(1),
        height: 1.min(drawer.height),
        ..drawer
    }
}

/// Login form element under a click
pub fn login_hit(area: Rect, x: u16, y: u16) -> Option<LoginFocus> {
    let (_, body, _) = chrome_layout(area);
    let rows = login_rows(body);
    [
        (rows[5], LoginFocus::Email),
        (rows[7], LoginFocus::Password),
        (rows[9], LoginFocus::LoginButton),
        (rows[11], LoginFocus::SignupLink),
    ]
    .into_iter()
    .find(|(rect, _)| hit(*rect, x, y))
    .map(|(_, focus)| focus)
}

/// Signup form element under a click
pub fn signup_hit(area: Rect, x: u16, y: u16) -> Option<SignupFocus> {
    let (_, body, _) = chrome_layout(area);
    let rows = signup_rows(body);
    [
        (rows[5], SignupFocus::Email),
        (rows[6], SignupFocus::Password),
        (rows[7], SignupFocus::ConfirmPassword),
        (rows[9], SignupFocus::SignupButton),
        (rows[11], SignupFocus::LoginLink),
    ]
    .into_iter()
    .find(|(rect, _)| hit(*rect, x, y))
    .map(|(_, focus)| focus)
}

/// Feature card under a click, if one is fully in view there
pub fn home_card_hit(area: Rect, screen: &HomeScreen, x: u16, y: u16) -> Option<Feature> {
    let (_, body, _) = chrome_layout(area);
    home_blocks(screen, body)
        .into_iter()
        .find_map(|(block, rect)| match block {
            HomeBlock::Card(i) if hit(rect, x, y) => Some(screen.cards[i].on_activate),
            _ => None,
        })
}

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;
    let bars = SystemBars::from_theme(theme);

    frame.render_widget(Block::default().style(theme.block_style()), area);

    let (status, body, nav) = chrome_layout(area);

    let trail: Vec<&str> = app.navigator.back_stack().iter().map(|r| r.as_str()).collect();
    let clock = chrono::Local::now().format("%H:%M").to_string();
    widgets::render_bar(
        frame,
        &format!("Crimicam · {}", trail.join(" › ")),
        &clock,
        bars.status_style(),
        status,
    );

    match &app.screen {
        Screen::Login(screen) => render_login(frame, screen, theme, body),
        Screen::Signup(screen) => render_signup(frame, screen, theme, body),
        Screen::Home(screen) => render_home(frame, app, screen, theme, body),
    }

    // Fade-in of the newly mounted screen
    if let Some(transition) = app.navigator.transition() {
        if transition.progress(Instant::now()).is_some_and(|p| p < 0.75) {
            frame
                .buffer_mut()
                .set_style(body, Style::default().add_modifier(Modifier::DIM));
        }
    }

    let back = if app.navigator.can_go_back() { "◁ Back" } else { "" };
    widgets::render_bar(frame, app.screen.hints(), back, bars.nav_style(), nav);

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, body);
    }
}

/// Centered column used by the login and signup forms
fn form_column(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width.saturating_sub(4));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        width,
        ..area
    }
}

fn render_brand(
    frame: &mut Frame,
    heading: &str,
    theme: &Theme,
    title: Rect,
    art: Rect,
    head: Rect,
) {
    frame.render_widget(
        Paragraph::new("C R I M I C A M")
            .style(theme.heading())
            .alignment(Alignment::Center),
        title,
    );
    let art_lines: Vec<Line> = FeatureGlyph::Camera
        .lines()
        .iter()
        .map(|l| Line::styled(*l, Style::default().fg(theme.primary)))
        .collect();
    frame.render_widget(Paragraph::new(art_lines).alignment(Alignment::Center), art);
    frame.render_widget(
        Paragraph::new(heading)
            .style(theme.title())
            .alignment(Alignment::Center),
        head,
    );
}

fn render_link(frame: &mut Frame, text: &str, focused: bool, theme: &Theme, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(text, theme.link(focused))).alignment(Alignment::Center),
        area,
    );
}

fn login_rows(area: Rect) -> Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1),
        Constraint::Length(3), // Illustration
        Constraint::Length(1), // Heading
        Constraint::Length(1),
        Constraint::Length(3), // Email
        Constraint::Length(1),
        Constraint::Length(3), // Password
        Constraint::Length(1),
        Constraint::Length(3), // Button
        Constraint::Length(1),
        Constraint::Length(1), // Signup link
        Constraint::Length(1), // Message
        Constraint::Min(0),
    ])
    .split(form_column(area))
}

fn render_login(frame: &mut Frame, screen: &LoginScreen, theme: &Theme, area: Rect) {
    let rows = login_rows(area);

    render_brand(frame, "Welcome Back", theme, rows[0], rows[2], rows[3]);

    widgets::render_email_field(
        frame,
        &screen.email,
        screen.focus == LoginFocus::Email,
        theme,
        rows[5],
    );
    widgets::render_password_field(
        frame,
        &screen.password,
        screen.focus == LoginFocus::Password,
        theme,
        rows[7],
    );

    frame.render_widget(
        GradientButton {
            label: "Login",
            colors: LOGIN_GRADIENT,
            corner_radius: 16,
            focused: screen.focus == LoginFocus::LoginButton,
            backdrop: theme.bg,
        },
        rows[9],
    );

    render_link(
        frame,
        "Don't have an account? Sign up",
        screen.focus == LoginFocus::SignupLink,
        theme,
        rows[11],
    );

    if let Some(msg) = &screen.message {
        frame.render_widget(
            Paragraph::new(msg.as_str())
                .style(theme.error())
                .alignment(Alignment::Center),
            rows[12],
        );
    }
}

fn signup_rows(area: Rect) -> Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1),
        Constraint::Length(3), // Illustration
        Constraint::Length(1), // Heading
        Constraint::Length(1),
        Constraint::Length(3), // Email
        Constraint::Length(3), // Password
        Constraint::Length(3), // Confirm password
        Constraint::Length(1),
        Constraint::Length(3), // Button
        Constraint::Length(1),
        Constraint::Length(1), // Login link
        Constraint::Length(1), // Message
        Constraint::Min(0),
    ])
    .split(form_column(area))
}

fn render_signup(frame: &mut Frame, screen: &SignupScreen, theme: &Theme, area: Rect) {
    let rows = signup_rows(area);

    render_brand(frame, "Create an Account", theme, rows[0], rows[2], rows[3]);

    widgets::render_email_field(
        frame,
        &screen.email,
        screen.focus == SignupFocus::Email,
        theme,
        rows[5],
    );
    widgets::render_password_field(
        frame,
        &screen.password,
        screen.focus == SignupFocus::Password,
        theme,
        rows[6],
    );
    widgets::render_password_field(
        frame,
        &screen.confirm_password,
        screen.focus == SignupFocus::ConfirmPassword,
        theme,
        rows[7],
    );

    frame.render_widget(
        GradientButton {
            label: "Sign Up",
            colors: LOGIN_GRADIENT,
            corner_radius: 16,
            focused: screen.focus == SignupFocus::SignupButton,
            backdrop: theme.bg,
        },
        rows[9],
    );

    render_link(
        frame,
        "Already have an account? Login",
        screen.focus == SignupFocus::LoginLink,
        theme,
        rows[11],
    );

    if let Some(message) = &screen.message {
        let (text, style) = match message {
            SignupMessage::Error(text) => (text.as_str(), theme.error()),
            SignupMessage::Success(text) => (text.as_str(), theme.success()),
        };
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            rows[12],
        );
    }
}

fn render_home(frame: &mut Frame, app: &App, screen: &HomeScreen, theme: &Theme, area: Rect) {
    let header = Rect {
        height: HOME_HEADER_HEIGHT.min(area.height),
        ..area
    };
    let header_line = Line::from(vec![
        Span::styled("  ◉ ", Style::default().fg(theme.primary)),
        Span::styled("Crimicam", theme.title()),
    ]);
    frame.render_widget(
        Paragraph::new(vec![Line::raw(""), header_line]).style(theme.text()),
        header,
    );
    if header.height >= 2 && header.width >= 4 {
        frame
            .buffer_mut()
            .set_string(header.right() - 4, header.y + 1, "☰", theme.text());
    }

    let dividers: Vec<bool> = screen.activity_rows().map(|(_, divider)| divider).collect();

    for (block, rect) in home_blocks(screen, area) {
        match block {
            HomeBlock::Card(i) => {
                let spec = &screen.cards[i];
                frame.render_widget(
                    FeatureCard {
                        spec,
                        focused: spec.on_activate == screen.focused_card,
                        text_color: theme.on_gradient,
                    },
                    rect,
                );
            }
            HomeBlock::Heading => {
                frame.render_widget(
                    Paragraph::new("Recent Activity").style(theme.title()),
                    rect,
                );
            }
            HomeBlock::Activity(i) => {
                frame.render_widget(
                    RecentActivityItem {
                        entry: &screen.activity[i],
                        show_divider: dividers[i],
                        theme,
                    },
                    rect,
                );
            }
        }
    }

    if screen.drawer.is_open() {
        let drawer = drawer_area(frame.area());
        widgets::render_drawer(frame, app.session.as_ref(), theme, drawer);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeBlock {
    Card(usize),
    Heading,
    Activity(usize),
}

/// Blocks of the home body that fit entirely in view, with their screen areas
fn home_blocks(screen: &HomeScreen, area: Rect) -> Vec<(HomeBlock, Rect)> {
    let header_height = HOME_HEADER_HEIGHT.min(area.height);
    let body = Rect {
        x: area.x + 2,
        y: area.y + header_height,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(header_height),
    };

    // Lay every block out in content coordinates, then shift by the scroll offset
    let mut layout: Vec<(u16, u16, HomeBlock)> = Vec::new();
    let mut y: u16 = 1;
    for i in 0..screen.cards.len() {
        layout.push((y, CARD_HEIGHT, HomeBlock::Card(i)));
        y = y.saturating_add(CARD_HEIGHT + 1);
    }
    y = y.saturating_add(1);
    layout.push((y, 1, HomeBlock::Heading));
    y = y.saturating_add(2);
    for i in 0..screen.activity.len() {
        layout.push((y, ACTIVITY_ROW_HEIGHT, HomeBlock::Activity(i)));
        y = y.saturating_add(ACTIVITY_ROW_HEIGHT);
    }

    layout
        .into_iter()
        .filter(|(top, height, _)| {
            *top >= screen.scroll && top + height - screen.scroll <= body.height
        })
        .map(|(top, height, block)| {
            let rect = Rect {
                y: body.y + top - screen.scroll,
                height,
                ..body
            };
            (block, rect)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::Services;
    use crate::tasks::UiTask;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    fn test_app() -> App {
        let mut config = Config::default();
        config.navigation.transitions = false;
        App::new(config, Services::placeholder())
    }

    #[test]
    fn test_chrome_layout() {
        let (status, body, nav) = chrome_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(status.height, 1);
        assert_eq!(body, Rect::new(0, 1, 80, 22));
        assert_eq!(nav.y, 23);
    }

    #[test]
    fn test_drawer_covers_most_of_width() {
        let drawer = drawer_area(Rect::new(0, 0, 100, 30));
        assert_eq!(drawer.width, 80);
        assert_eq!(drawer.y, 1);
    }

    #[test]
    fn test_form_hit_areas() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(login_hit(area, 30, 9), Some(LoginFocus::Email));
        assert_eq!(login_hit(area, 30, 17), Some(LoginFocus::LoginButton));
        assert_eq!(login_hit(area, 5, 17), None);
        assert_eq!(signup_hit(area, 30, 15), Some(SignupFocus::ConfirmPassword));
        assert_eq!(signup_hit(area, 40, 22), Some(SignupFocus::LoginLink));
    }

    #[test]
    fn test_card_hit_follows_scroll() {
        let app = test_app();
        let area = Rect::new(0, 0, 100, 40);
        let mut home = HomeScreen::new(&app.services);
        assert_eq!(home_card_hit(area, &home, 20, 7), Some(Feature::Camera));
        assert_eq!(home_card_hit(area, &home, 20, 12), None);

        // Scrolled past the top of the first card, it is no longer drawn
        home.scroll = 2;
        assert_eq!(home_card_hit(area, &home, 20, 7), None);
        assert_eq!(home_card_hit(area, &home, 20, 11), Some(Feature::Monitor));
    }

    #[test]
    fn test_login_screen_renders() {
        let app = test_app();
        let screen = draw(&app, 80, 36).join("\n");
        assert!(screen.contains("C R I M I C A M"));
        assert!(screen.contains("Email Address"));
        assert!(screen.contains("Don't have an account? Sign up"));
    }

    #[test]
    fn test_home_renders_five_activity_rows() {
        let mut app = test_app();
        app.sign_in_for_test();

        let lines = draw(&app, 80, 80);
        let alerts = lines.iter().filter(|l| l.contains("Kawatan Alert")).count();
        assert_eq!(alerts, 5);

        let dividers = lines.iter().filter(|l| l.trim_start().starts_with("────")).count();
        assert_eq!(dividers, 4);
        assert!(lines.iter().any(|l| l.contains("Recent Activity")));
    }

    #[test]
    fn test_drawer_shows_account_and_version() {
        let mut app = test_app();
        app.sign_in_for_test();
        app.ui_queue.schedule(UiTask::OpenDrawer);
        app.run_pending_tasks();

        let lines = draw(&app, 80, 40);
        let logout_row = drawer_logout_area(Rect::new(0, 0, 80, 40)).y as usize;
        assert!(lines[logout_row].contains("Log out"));

        let screen = lines.join("\n");
        assert!(screen.contains("tester@crimicam.app"));
        assert!(screen.contains("Log out"));
        assert!(screen.contains(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
    }
}
