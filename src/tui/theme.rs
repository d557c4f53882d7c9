//! Theme system for TUI colors and styles
//!
//! Status and priority colors match the CLI badges in `display`.

use iocraft::prelude::Color;

use crate::types::{TicketPriority, TicketStatus};

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_open: Color,
    pub status_in_progress: Color,
    pub status_closed: Color,

    // Priority colors
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // UI colors
    pub brand: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub error: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Green,
            status_in_progress: Color::Yellow,
            status_closed: GRAY,

            priority_high: Color::Red,
            priority_medium: Color::Yellow,
            priority_low: Color::White,

            brand: Color::Green,
            border: GRAY,
            border_focused: Color::Green,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::DarkGreen,
            highlight_text: Color::White,
            error: Color::Red,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.status_open,
            TicketStatus::InProgress => self.status_in_progress,
            TicketStatus::Closed => self.status_closed,
        }
    }

    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::High => self.priority_high,
            TicketPriority::Medium => self.priority_medium,
            TicketPriority::Low => self.priority_low,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
