//! Shared TUI components
//!
//! Building blocks for the ticket manager screen and its modals.

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod select;
pub mod shortcuts;
pub mod ticket_card;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, delete_shortcuts, empty_shortcuts, form_shortcuts,
    manage_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalContainer, ModalContainerProps, ModalTone};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use select::{Select, SelectProps, Selectable};
pub use shortcuts::ShortcutsBuilder;
pub use ticket_card::{TicketCard, TicketCardProps};
pub use toast::{Toast, ToastLevel, render_toast};
