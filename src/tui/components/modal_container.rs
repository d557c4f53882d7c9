//! Modal container component
//!
//! Bordered box with a title row, a content area, and an optional footer.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Border accent of a modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalTone {
    #[default]
    Focused,
    /// Destructive confirmation
    Danger,
}

impl ModalTone {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Danger => theme().error,
        }
    }
}

#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Width in columns (default: 60)
    pub width: Option<u32>,
    pub tone: ModalTone,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.tone.to_color();
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: props.width.unwrap_or(60),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: title, color: border_color, weight: Weight::Bold)
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
