//! Theme definitions for crimicam
//!
//! Provides three built-in themes: Dark, Light and Transparent, plus the
//! system bar colors derived from a theme's background.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent colors
    pub primary: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub divider: Color,

    /// Text drawn on gradients
    pub on_gradient: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Dark purple theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(28, 27, 31),          // #1c1b1f
            fg: Color::Rgb(230, 225, 229),       // #e6e1e5
            fg_dim: Color::Rgb(147, 143, 153),   // #938f99

            primary: Color::Rgb(208, 188, 255),  // #d0bcff

            success: Color::Rgb(128, 216, 160),
            error: Color::Rgb(242, 184, 181),    // #f2b8b5

            border: Color::Rgb(73, 69, 79),      // #49454f
            divider: Color::Rgb(73, 69, 79),

            on_gradient: Color::White,
        }
    }

    /// Light purple theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(255, 251, 254),       // #fffbfe
            fg: Color::Rgb(28, 27, 31),          // #1c1b1f
            fg_dim: Color::Rgb(121, 116, 126),   // #79747e

            primary: Color::Rgb(102, 80, 164),   // #6650a4

            success: Color::Rgb(56, 142, 60),
            error: Color::Rgb(179, 38, 30),      // #b3261e

            border: Color::Rgb(202, 196, 208),   // #cac4d0
            divider: Color::Rgb(202, 196, 208),

            on_gradient: Color::White,
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            primary: Color::Magenta,

            success: Color::Green,
            error: Color::Red,

            border: Color::DarkGray,
            divider: Color::DarkGray,

            on_gradient: Color::White,
        }
    }

    // Style helpers for common UI patterns

    /// Background fill for whole areas
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent heading
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Text button / link
    pub fn link(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.primary).bg(self.bg);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Text field outline
    pub fn field_border(&self, focused: bool, valid: Option<bool>) -> Style {
        let color = if valid == Some(false) {
            self.error
        } else if focused {
            self.primary
        } else {
            self.border
        };
        let style = Style::default().fg(color).bg(self.bg);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn divider(&self) -> Style {
        Style::default().fg(self.divider).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

/// Relative luminance of an RGB color in 0.0..=1.0
///
/// Named terminal colors have no known value and return `None`.
pub fn luminance(color: Color) -> Option<f32> {
    fn channel(c: u8) -> f32 {
        let c = c as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    match color {
        Color::Rgb(r, g, b) => {
            Some(0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b))
        }
        Color::White => Some(1.0),
        Color::Black => Some(0.0),
        _ => None,
    }
}

/// Linear blend between two colors, `t` in 0.0..=1.0
pub fn lerp_color(start: Color, end: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (start, end) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => start,
        _ => end,
    }
}

/// Colors of the top status row and bottom navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemBars {
    pub status_bg: Color,
    pub nav_bg: Color,
    /// Bars are light, so icons and text must be dark
    pub light_status_bar: bool,
    pub light_nav_bar: bool,
}

impl SystemBars {
    /// Both bars take the theme background; icon contrast follows its luminance
    pub fn from_theme(theme: &Theme) -> Self {
        let light = luminance(theme.bg).is_some_and(|l| l > 0.5);
        Self {
            status_bg: theme.bg,
            nav_bg: theme.bg,
            light_status_bar: light,
            light_nav_bar: light,
        }
    }

    fn icon_color(light: bool) -> Color {
        if light {
            Color::Rgb(28, 27, 31)
        } else {
            Color::Rgb(230, 225, 229)
        }
    }

    pub fn status_style(&self) -> Style {
        Style::default()
            .fg(Self::icon_color(self.light_status_bar))
            .bg(self.status_bg)
    }

    pub fn nav_style(&self) -> Style {
        Style::default()
            .fg(Self::icon_color(self.light_nav_bar))
            .bg(self.nav_bg)
            .add_modifier(Modifier::DIM)
    }
}
