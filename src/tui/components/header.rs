//! App header bar component
//!
//! Displays the application title and optional ticket count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Resolv")
    pub title: Option<&'a str>,

    pub subtitle: Option<&'a str>,

    pub ticket_count: Option<usize>,
}

/// App header bar showing title and ticket count
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title = props.title.unwrap_or("Resolv");
    let left_text = match props.subtitle {
        Some(sub) => format!("{} - {}", title, sub),
        None => title.to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.highlight_text,
                weight: Weight::Bold,
            )
            #(props.ticket_count.map(|count| element! {
                Text(
                    content: format!("{} tickets", count),
                    color: theme.highlight_text,
                )
            }))
        }
    }
}
