//! Empty state component
//!
//! Shown in place of the ticket list when every ticket has been deleted or
//! the seed data is turned off.

use iocraft::prelude::*;

use crate::tui::theme::theme;

pub const EMPTY_TITLE: &str = "No Tickets";
pub const EMPTY_MESSAGE: &str = "There are no tickets to show.";
pub const EMPTY_HINT: &str = "Press 'n' to create a new ticket.";

#[derive(Default, Props)]
pub struct EmptyStateProps {}

#[component]
pub fn EmptyState(_props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: "i", color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: EMPTY_TITLE, color: theme.text, weight: Weight::Bold)

            View(margin_top: 1, max_width: 60) {
                Text(content: EMPTY_MESSAGE, color: theme.text_dimmed)
            }

            View(margin_top: 2) {
                Text(content: EMPTY_HINT, color: theme.text_dimmed)
            }
        }
    }
}
