//! Modal overlay component
//!
//! Full-screen absolutely positioned layer that centers its children over
//! the ticket list.

use iocraft::prelude::*;

/// Backdrop color behind open modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Hide the list behind the modal (default: true)
    pub show_backdrop: Option<bool>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let show_backdrop = props.show_backdrop.unwrap_or(true);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: if show_backdrop { Some(MODAL_BACKDROP) } else { None },
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}
