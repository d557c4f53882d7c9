use super::{CommandOutput, require_route};
use crate::auth::SessionStorage;
use crate::context::AppContext;
use crate::display::{dimmed, format_ticket_card};
use crate::error::Result;
use crate::routes::Route;
use crate::tui::run_ticket_manager;

/// Open the interactive ticket manager (`resolv tickets`)
pub async fn cmd_tickets<S: SessionStorage>(ctx: &AppContext<S>) -> Result<()> {
    require_route(ctx, Route::ManageTickets, false)?;
    run_ticket_manager(ctx.initial_tickets()).await
}

/// Print the starting ticket collection (`resolv tickets ls`)
pub fn cmd_tickets_ls<S: SessionStorage>(ctx: &AppContext<S>, output_json: bool) -> Result<()> {
    require_route(ctx, Route::ManageTickets, output_json)?;

    let tickets = ctx.initial_tickets();
    let text = if tickets.is_empty() {
        dimmed("No tickets.")
    } else {
        tickets
            .iter()
            .map(format_ticket_card)
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    CommandOutput::new(serde_json::to_value(tickets.as_slice())?)
        .with_text(text)
        .print(output_json)
}
