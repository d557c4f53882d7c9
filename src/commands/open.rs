use super::print_json;
use super::{cmd_dashboard, cmd_landing, cmd_login, cmd_signup, cmd_tickets};
use crate::auth::SessionStorage;
use crate::context::AppContext;
use crate::display::{format_login_screen, yellow};
use crate::error::{ResolvError, Result};
use crate::routes::{Navigation, Route};

/// Run `route` through the navigation guard.
///
/// A redirect shows the login screen and fails with `AuthRequired`.
pub fn require_route<S: SessionStorage>(
    ctx: &AppContext<S>,
    route: Route,
    output_json: bool,
) -> Result<()> {
    match ctx.navigate(route) {
        Navigation::Allowed(_) => Ok(()),
        Navigation::Redirected { from, to } => {
            if output_json {
                print_json(&serde_json::json!({
                    "route": from.path(),
                    "redirect": to.path(),
                }))?;
            } else {
                println!(
                    "{}\n\n{}",
                    yellow(&format!("Please log in to view {}.", from.title())),
                    format_login_screen(None)
                );
            }
            Err(ResolvError::AuthRequired(from.path().to_string()))
        }
    }
}

/// Open any route path (`resolv open <path>`)
pub async fn cmd_open<S: SessionStorage>(
    ctx: &mut AppContext<S>,
    path: &str,
    output_json: bool,
) -> Result<()> {
    let route: Route = path.parse()?;
    require_route(ctx, route, output_json)?;

    match route {
        Route::Landing => cmd_landing(ctx, output_json),
        Route::Login => cmd_login(ctx, None, None, output_json),
        Route::Signup => cmd_signup(None, None, None, None, output_json),
        Route::Dashboard => cmd_dashboard(ctx, output_json),
        Route::ManageTickets => cmd_tickets(ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryStorage, Session};
    use crate::config::Config;

    fn context() -> AppContext<MemoryStorage> {
        AppContext::new(
            Config::default(),
            Session::load(MemoryStorage::new()).unwrap(),
        )
    }

    #[test]
    fn test_guard_blocks_protected_routes_without_session() {
        let ctx = context();
        let err = require_route(&ctx, Route::ManageTickets, true).unwrap_err();
        assert!(matches!(err, ResolvError::AuthRequired(path) if path == "/tickets/manage"));
        assert!(require_route(&ctx, Route::Signup, true).is_ok());
    }

    #[test]
    fn test_guard_allows_with_session() {
        let mut ctx = context();
        ctx.session.start().unwrap();
        assert!(require_route(&ctx, Route::Dashboard, true).is_ok());
    }

    #[tokio::test]
    async fn test_open_rejects_unknown_path() {
        let mut ctx = context();
        let err = cmd_open(&mut ctx, "/nowhere", true).await.unwrap_err();
        assert!(matches!(err, ResolvError::UnknownRoute(_)));
    }

    #[tokio::test]
    async fn test_open_dashboard_when_logged_in() {
        let mut ctx = context();
        ctx.session.start().unwrap();
        cmd_open(&mut ctx, "/dashboard", true).await.unwrap();
    }
}
