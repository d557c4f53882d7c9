//! Inline selector for enum fields
//!
//! Displays as `◀ value ▶`; the value is cycled with left/right.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{TicketPriority, TicketStatus};

#[derive(Default, Props)]
pub struct SelectProps {
    pub value: String,
    pub has_focus: bool,
    /// Semantic color for the value (status or priority)
    pub value_color: Option<Color>,
}

#[component]
pub fn Select(props: &SelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let arrow_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            Text(content: "◀", color: arrow_color)
            Text(
                content: props.value.clone(),
                color: props.value_color.unwrap_or(theme.text),
            )
            Text(content: "▶", color: arrow_color)
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + 'static {
    fn all_values() -> Vec<Self>;
    fn index(&self) -> usize;
    /// Next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + 1) % values.len()]
    }
    /// Previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let prev_idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[prev_idx]
    }
}

impl Selectable for TicketStatus {
    fn all_values() -> Vec<Self> {
        vec![
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ]
    }

    fn index(&self) -> usize {
        match self {
            TicketStatus::Open => 0,
            TicketStatus::InProgress => 1,
            TicketStatus::Closed => 2,
        }
    }
}

impl Selectable for TicketPriority {
    fn all_values() -> Vec<Self> {
        vec![
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
        ]
    }

    fn index(&self) -> usize {
        match self {
            TicketPriority::Low => 0,
            TicketPriority::Medium => 1,
            TicketPriority::High => 2,
        }
    }
}
