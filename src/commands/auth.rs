//! Authentication commands.
//!
//! - `login`: check the form against the test credential and start a session
//! - `signup`: validate the form and point at the test credential
//! - `logout`: remove the session flag

use serde_json::{Map, Value, json};

use super::{CommandOutput, print_json};
use crate::auth::{
    AuthErrors, LoginForm, LoginOutcome, SessionStorage, SignupForm, SignupOutcome, TEST_EMAIL,
    login, logout, signup,
};
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::display::{format_dashboard, format_login_screen, format_signup_screen, green};
use crate::error::{ResolvError, Result};
use crate::routes::Route;

fn errors_json(errors: &AuthErrors) -> Value {
    let map: Map<String, Value> = errors
        .iter()
        .map(|(field, message)| (field.key().to_string(), json!(message)))
        .collect();
    Value::Object(map)
}

fn rejected(errors: &AuthErrors) -> ResolvError {
    let messages: Vec<&str> = errors.values().copied().collect();
    ResolvError::Validation(messages.join(" "))
}

/// Log in (`resolv login`)
///
/// Without flags the login screen is shown. Missing flags are submitted as
/// empty fields.
pub fn cmd_login<S: SessionStorage>(
    ctx: &mut AppContext<S>,
    email: Option<String>,
    password: Option<String>,
    output_json: bool,
) -> Result<()> {
    if email.is_none() && password.is_none() {
        return CommandOutput::new(json!({
            "route": Route::Login.path(),
            "authenticated": ctx.session.is_authenticated(),
        }))
        .with_text(format_login_screen(None))
        .print(output_json);
    }

    let form = LoginForm::new(email.unwrap_or_default(), password.unwrap_or_default());
    match login(&mut ctx.session, &form)? {
        LoginOutcome::Success { redirect } => {
            let dashboard = Dashboard::build(&ctx.initial_tickets());
            CommandOutput::new(json!({
                "authenticated": true,
                "redirect": redirect.path(),
            }))
            .with_text(format!(
                "{}\n\n{}",
                green("Login successful!"),
                format_dashboard(&dashboard)
            ))
            .print(output_json)
        }
        LoginOutcome::Rejected(errors) => {
            if output_json {
                print_json(&json!({
                    "authenticated": false,
                    "errors": errors_json(&errors),
                }))?;
            } else {
                println!("{}", format_login_screen(Some(&errors)));
            }
            Err(rejected(&errors))
        }
    }
}

/// Sign up (`resolv signup`)
///
/// No account is ever created; a valid form only reveals the test credential.
pub fn cmd_signup(
    full_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
    output_json: bool,
) -> Result<()> {
    if full_name.is_none() && email.is_none() && password.is_none() && confirm_password.is_none() {
        return CommandOutput::new(json!({ "route": Route::Signup.path() }))
            .with_text(format_signup_screen(None))
            .print(output_json);
    }

    let form = SignupForm::new(
        full_name.unwrap_or_default(),
        email.unwrap_or_default(),
        password.unwrap_or_default(),
        confirm_password.unwrap_or_default(),
    );
    match signup(&form) {
        SignupOutcome::Accepted { redirect } => CommandOutput::new(json!({
            "accepted": true,
            "redirect": redirect.path(),
            "test_email": TEST_EMAIL,
        }))
        .with_text(format_signup_screen(Some(&AuthErrors::new())))
        .print(output_json),
        SignupOutcome::Rejected(errors) => {
            if output_json {
                print_json(&json!({
                    "accepted": false,
                    "errors": errors_json(&errors),
                }))?;
            } else {
                println!("{}", format_signup_screen(Some(&errors)));
            }
            Err(rejected(&errors))
        }
    }
}

/// Log out (`resolv logout`)
pub fn cmd_logout<S: SessionStorage>(ctx: &mut AppContext<S>, output_json: bool) -> Result<()> {
    let redirect = logout(&mut ctx.session)?;

    CommandOutput::new(json!({
        "authenticated": false,
        "redirect": redirect.path(),
    }))
    .with_text(format!(
        "{}\n\n{}",
        green("Logged out."),
        format_login_screen(None)
    ))
    .print(output_json)
}
