use serde_json::json;

use super::CommandOutput;
use crate::auth::SessionStorage;
use crate::context::AppContext;
use crate::display::format_landing;
use crate::error::Result;
use crate::routes::Route;

/// Show the landing screen (`resolv`)
pub fn cmd_landing<S: SessionStorage>(ctx: &AppContext<S>, output_json: bool) -> Result<()> {
    let authenticated = ctx.session.is_authenticated();
    let entry_points = if authenticated {
        vec![Route::Dashboard, Route::ManageTickets]
    } else {
        vec![Route::Signup, Route::Login]
    };

    CommandOutput::new(json!({
        "route": Route::Landing.path(),
        "authenticated": authenticated,
        "entry_points": entry_points.iter().map(Route::path).collect::<Vec<_>>(),
    }))
    .with_text(format_landing(authenticated))
    .print(output_json)
}
