//! Reusable UI widgets
//!
//! Contains the building blocks the screens are composed from:
//! - Email and password text fields
//! - Gradient button and feature card
//! - Recent activity rows and the navigation drawer
//! - Flash message and bar helpers

use crate::fields::{EmailField, FieldState, PasswordField};
use crate::types::{ActivityEntry, FeatureCardSpec, Session};
use crate::ui::theme::{lerp_color, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
    Frame,
};

/// Paint a left-to-right gradient as the background of `area`
pub fn fill_gradient(buf: &mut Buffer, area: Rect, start: Color, end: Color) {
    let span = area.width.saturating_sub(1).max(1) as f32;
    for x in area.left()..area.right() {
        let color = lerp_color(start, end, (x - area.left()) as f32 / span);
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(color);
            }
        }
    }
}

fn render_field(
    frame: &mut Frame,
    label: &str,
    state: &FieldState,
    display: String,
    trailing: Option<&str>,
    focused: bool,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.field_border(focused, state.is_valid))
        .style(theme.block_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_width = inner.width.saturating_sub(if trailing.is_some() { 3 } else { 0 });

    // Keep the cursor visible on long values
    let cursor = state.cursor() as u16;
    let offset = cursor.saturating_sub(text_width.saturating_sub(1));
    let visible: String = display.chars().skip(offset as usize).take(text_width as usize).collect();

    let content = if state.is_empty() && !focused {
        Paragraph::new(label.to_string()).style(theme.text_dim())
    } else {
        Paragraph::new(visible).style(theme.text())
    };
    frame.render_widget(
        content,
        Rect {
            width: text_width,
            ..inner
        },
    );

    if let Some(icon) = trailing {
        let icon_area = Rect {
            x: inner.x + inner.width.saturating_sub(2),
            y: inner.y,
            width: 2.min(inner.width),
            height: inner.height.min(1),
        };
        frame.render_widget(
            Paragraph::new(icon.to_string()).style(Style::default().fg(theme.primary)),
            icon_area,
        );
    }

    if focused && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor - offset, inner.y));
    }
}

/// Outlined email input
pub fn render_email_field(
    frame: &mut Frame,
    field: &EmailField,
    focused: bool,
    theme: &Theme,
    area: Rect,
) {
    render_field(
        frame,
        field.label,
        &field.state,
        field.value().to_string(),
        None,
        focused,
        theme,
        area,
    );
}

/// Outlined password input with the visibility indicator on the right
pub fn render_password_field(
    frame: &mut Frame,
    field: &PasswordField,
    focused: bool,
    theme: &Theme,
    area: Rect,
) {
    let icon = if field.hidden { "◌" } else { "◉" };
    render_field(
        frame,
        field.label,
        &field.state,
        field.display_value(),
        Some(icon),
        focused,
        theme,
        area,
    );
}

/// Full-width button with a horizontal gradient
pub struct GradientButton<'a> {
    pub label: &'a str,
    pub colors: (Color, Color),
    pub corner_radius: u16,
    pub focused: bool,
    /// Color behind the button, shown through the rounded corners
    pub backdrop: Color,
}

impl Widget for GradientButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        fill_gradient(buf, area, self.colors.0, self.colors.1);

        // Knock out the corners for a rounded outline
        if self.corner_radius > 0 && area.height >= 2 && area.width >= 2 {
            for (x, y) in [
                (area.left(), area.top()),
                (area.right() - 1, area.top()),
                (area.left(), area.bottom() - 1),
                (area.right() - 1, area.bottom() - 1),
            ] {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(self.backdrop);
                }
            }
        }

        let label = if self.focused {
            format!("▸ {} ◂", self.label)
        } else {
            self.label.to_string()
        };
        let mut style = Style::default().fg(Color::White);
        if self.focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        let label_area = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .render(label_area, buf);
    }
}

/// Tappable card advertising one feature
pub struct FeatureCard<'a> {
    pub spec: &'a FeatureCardSpec,
    pub focused: bool,
    pub text_color: Color,
}

impl Widget for FeatureCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height < 3 {
            return;
        }
        fill_gradient(buf, area, self.spec.gradient_start, self.spec.gradient_end);

        let glyph = self.spec.glyph.lines();
        let glyph_width = glyph.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        if area.width > glyph_width + 30 {
            let glyph_area = Rect {
                x: area.right() - glyph_width - 5,
                y: area.y + 1,
                width: glyph_width,
                height: (glyph.len() as u16).min(area.height.saturating_sub(2)),
            };
            let lines: Vec<Line> = glyph.iter().map(|l| Line::raw(*l)).collect();
            Paragraph::new(lines)
                .style(Style::default().fg(self.text_color).add_modifier(Modifier::DIM))
                .render(glyph_area, buf);
        }

        let text_area = Rect {
            x: area.x + 3,
            y: area.y + 1,
            width: area.width.saturating_sub(8),
            height: area.height.saturating_sub(2),
        };
        let title_style = Style::default()
            .fg(self.text_color)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(vec![
            Line::styled(self.spec.title, title_style),
            Line::raw(""),
            Line::styled(self.spec.description, Style::default().fg(self.text_color)),
        ])
        .render(text_area, buf);

        buf.set_string(
            area.right() - 3,
            area.y + area.height / 2,
            "↗",
            Style::default().fg(self.text_color),
        );

        if self.focused {
            for y in area.top()..area.bottom() {
                buf.set_string(area.x, y, "▌", Style::default().fg(self.text_color));
            }
        }
    }
}

/// One entry of the recent activity list
pub struct RecentActivityItem<'a> {
    pub entry: &'a ActivityEntry,
    pub show_divider: bool,
    pub theme: &'a Theme,
}

impl Widget for RecentActivityItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 6 {
            return;
        }
        let theme = self.theme;
        buf.set_string(area.x, area.y, "🔔", Style::default().fg(theme.primary));

        let text_x = area.x + 4;
        let text_width = area.width.saturating_sub(4);
        buf.set_stringn(text_x, area.y, &self.entry.title, text_width as usize, theme.text());
        buf.set_stringn(
            text_x,
            area.y + 1,
            &self.entry.subtitle,
            text_width as usize,
            theme.text_dim(),
        );

        if self.show_divider && area.height >= 3 {
            buf.set_string(
                area.x,
                area.y + 2,
                "─".repeat(area.width as usize),
                theme.divider(),
            );
        }
    }
}

/// Row of the drawer, counted from its top, that holds "Log out"
pub const DRAWER_LOGOUT_ROW: u16 = 5;

/// Slide-in drawer with account info, logout and version
pub fn render_drawer(
    frame: &mut Frame,
    session: Option<&Session>,
    theme: &Theme,
    area: Rect,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border).bg(theme.bg))
        .style(theme.block_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::raw(""), Line::styled("  Account", theme.heading())];
    match session {
        Some(session) => {
            lines.push(Line::styled(format!("  {}", session.email), theme.text()));
            lines.push(Line::styled(
                format!("  Signed in {}", session.formatted_start()),
                theme.text_dim(),
            ));
        }
        None => {
            lines.push(Line::styled("  Not signed in", theme.text_dim()));
            lines.push(Line::raw(""));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled("  ▸ Log out", theme.link(true)));

    frame.render_widget(Paragraph::new(lines).style(theme.text()), inner);

    let version_area = Rect {
        y: inner.y + inner.height.saturating_sub(2),
        height: 1.min(inner.height),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
            .style(theme.text_dim())
            .alignment(Alignment::Center),
        version_area,
    );
}

/// Render a flash message just above the bottom bar
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(Clear, flash_area);
    frame.render_widget(flash, flash_area);
}

/// Render a one-row bar with left and right aligned text
pub fn render_bar(frame: &mut Frame, left: &str, right: &str, style: Style, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(format!(" {}", left)).style(style), area);

    let right_len = right.chars().count() as u16;
    let right_area = Rect {
        x: area.x + area.width.saturating_sub(right_len + 1),
        width: (right_len + 1).min(area.width),
        ..area
    };
    frame.render_widget(Paragraph::new(right.to_string()).style(style), right_area);
}
