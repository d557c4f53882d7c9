use super::{CommandOutput, require_route};
use crate::auth::SessionStorage;
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::display::format_dashboard;
use crate::error::Result;
use crate::routes::Route;

/// Show the dashboard (`resolv dashboard`)
pub fn cmd_dashboard<S: SessionStorage>(ctx: &AppContext<S>, output_json: bool) -> Result<()> {
    require_route(ctx, Route::Dashboard, output_json)?;

    let dashboard = Dashboard::build(&ctx.initial_tickets());
    CommandOutput::new(serde_json::to_value(&dashboard)?)
        .with_text(format_dashboard(&dashboard))
        .print(output_json)
}
