//! Ticket card component
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │> TKT-001  Website login form is broken   │
//! │  [in progress]                           │
//! │  Users are reporting they cannot log in. │
//! │  Priority: high                          │
//! ╰──────────────────────────────────────────╯
//! ```

use iocraft::prelude::*;

use crate::display::{NO_DESCRIPTION, status_text};
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: usize = 6;

#[derive(Default, Props)]
pub struct TicketCardProps {
    pub ticket: Option<Ticket>,
    pub is_selected: bool,
}

#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element!(View).into_any();
    };

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let indicator = if props.is_selected { ">" } else { " " };
    let description = ticket
        .description
        .clone()
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    element! {
        View(
            width: 100pct,
            height: CARD_HEIGHT as u32,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: indicator, color: theme.border_focused, weight: Weight::Bold)
                Text(content: ticket.id.clone(), color: theme.id_color, weight: Weight::Bold)
                Text(content: ticket.title.clone(), color: theme.text, weight: Weight::Bold)
            }
            Text(
                content: format!("  [{}]", status_text(ticket.status)),
                color: theme.status_color(ticket.status),
            )
            Text(
                content: format!("  {}", description),
                color: if ticket.description.is_some() { theme.text } else { theme.text_dimmed },
                wrap: TextWrap::NoWrap,
            )
            Text(
                content: format!("  Priority: {}", ticket.priority),
                color: theme.priority_color(ticket.priority),
            )
        }
    }
    .into_any()
}
