//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-s", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Save", "Next Field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.brand,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the ticket list
pub fn manage_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_crud()
        .with_quit()
        .build()
}

/// Shortcuts when the list is empty
pub fn empty_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("n", "New Ticket")
        .with_quit()
        .build()
}

/// Shortcuts for the ticket form
pub fn form_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Next Field")
        .add("S-Tab", "Prev Field")
        .add("←/→", "Change")
        .add("C-s", "Save")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for the delete confirmation
pub fn delete_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("y", "Delete")
        .add("n", "Cancel")
        .build()
}
