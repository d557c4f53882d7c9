//! TUI module for the interactive ticket manager
//!
//! - `manage` - card list with create, edit and delete modals

pub mod components;
pub mod manage;
pub mod theme;

use iocraft::prelude::*;

use crate::error::{ResolvError, Result};
use crate::ticket::TicketCollection;

pub use manage::{TicketManager, TicketManagerProps};
pub use theme::Theme;

/// Run the ticket manager fullscreen until the user quits
pub async fn run_ticket_manager(tickets: TicketCollection) -> Result<()> {
    tracing::debug!("Launching ticket manager with {} tickets", tickets.len());
    element!(TicketManager(tickets: Some(tickets)))
        .fullscreen()
        .await
        .map_err(|e| ResolvError::Tui(format!("ticket manager failed: {e}")))
}
