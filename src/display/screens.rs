//! Text renderings of the non-interactive screens

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{bold, cyan, dimmed, format_field_errors, green};
use crate::auth::{AuthErrors, TEST_EMAIL, TEST_PASSWORD};
use crate::dashboard::{Dashboard, format_count};
use crate::routes::Route;

pub const BRAND: &str = "Resolv";
pub const TAGLINE: &str = "Get it done. Resolve issues, fast.";

const FEATURES: [(&str, &str); 3] = [
    (
        "Effortless Management",
        "Organize, track, and prioritize tickets with an intuitive interface designed for maximum efficiency.",
    ),
    (
        "Rapid Resolution",
        "Speed up your support process with quick access to ticket details and collaborative tools.",
    ),
    (
        "Secure & Reliable",
        "Ensure your data is safe with robust security measures and a dependable platform.",
    ),
];

/// `Label (command)` hint for a route
fn nav_hint(label: &str, command: &str) -> String {
    format!("{} {}", label, dimmed(&format!("(resolv {command})")))
}

fn nav_bar(authenticated: bool) -> String {
    let items = if authenticated {
        vec![
            nav_hint("Dashboard", "dashboard"),
            nav_hint("Tickets", "tickets"),
            nav_hint("Logout", "logout"),
        ]
    } else {
        vec![nav_hint("Sign Up", "signup"), nav_hint("Login", "login")]
    };
    items.join("   ")
}

pub fn format_landing(authenticated: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", green(&bold(BRAND))));
    out.push_str(&format!("{TAGLINE}\n\n"));
    out.push_str(&format!("{}\n\n", nav_bar(authenticated)));

    if !authenticated {
        out.push_str(&format!(
            "Get Started: {}   Login: {}\n\n",
            cyan(Route::Signup.path()),
            cyan(Route::Login.path())
        ));
    }

    out.push_str(&format!("{}\n", bold("Streamline Your Workflow")));
    for (title, body) in FEATURES {
        out.push_str(&format!("  {}\n    {}\n", cyan(title), body));
    }
    out
}

/// Login screen, optionally with the errors from a rejected attempt
pub fn format_login_screen(errors: Option<&AuthErrors>) -> String {
    let mut out = format!(
        "{}\nEnter your email and password to access your account\n\n",
        bold(Route::Login.title())
    );
    match errors {
        Some(errors) if !errors.is_empty() => {
            out.push_str(&format_field_errors(errors.iter().map(|(f, m)| (f, *m))));
            out.push('\n');
        }
        _ => {
            out.push_str("  resolv login --email <EMAIL> --password <PASSWORD>\n");
        }
    }
    out.push_str(&format!(
        "\nDon't have an account? {}",
        nav_hint("Sign Up", "signup")
    ));
    out
}

pub fn format_signup_screen(errors: Option<&AuthErrors>) -> String {
    let mut out = format!(
        "{}\nstart managing your tickets efficiently today!\n\n",
        bold(Route::Signup.title())
    );
    match errors {
        Some(errors) if !errors.is_empty() => {
            out.push_str(&format_field_errors(errors.iter().map(|(f, m)| (f, *m))));
            out.push('\n');
        }
        Some(_) => {
            out.push_str(&format!(
                "{}\n\nPlease use these test credentials to log in:\n\n  Email: {}\n  Password: {}\n",
                green("Signup Successful!"),
                TEST_EMAIL,
                TEST_PASSWORD
            ));
        }
        None => {
            out.push_str(
                "  resolv signup --name <NAME> --email <EMAIL> --password <PASSWORD> --confirm-password <PASSWORD>\n",
            );
        }
    }
    out.push_str(&format!(
        "\nAlready have an account? {}",
        nav_hint("Login", "login")
    ));
    out
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Statistic")]
    title: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let rows: Vec<StatRow> = dashboard
        .stats
        .iter()
        .map(|card| StatRow {
            title: card.title.to_string(),
            value: card.formatted_value(),
        })
        .collect();
    let mut stats = Table::new(rows);
    stats.with(Style::modern());

    let counts = dashboard.seed_counts;
    let seed_rows = vec![
        StatRow {
            title: "Open".to_string(),
            value: format_count(counts.open as u64),
        },
        StatRow {
            title: "In Progress".to_string(),
            value: format_count(counts.in_progress as u64),
        },
        StatRow {
            title: "Closed".to_string(),
            value: format_count(counts.closed as u64),
        },
        StatRow {
            title: "Total".to_string(),
            value: format_count(counts.total as u64),
        },
    ];
    let mut seed = Table::new(seed_rows);
    seed.with(Style::modern());

    format!(
        "{}\n\n{stats}\n\n{}\n{seed}\n\n{} {}\n{}",
        bold(Route::Dashboard.title()),
        bold("Example tickets"),
        green("Manage Tickets"),
        dimmed(&format!("(resolv tickets, {})", dashboard.call_to_action.path())),
        nav_bar(true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{LoginForm, SignupForm};
    use crate::ticket::TicketCollection;

    #[test]
    fn test_landing_nav_follows_session() {
        let logged_out = format_landing(false);
        assert!(logged_out.contains(TAGLINE));
        assert!(logged_out.contains("Sign Up"));
        assert!(!logged_out.contains("Logout"));

        let logged_in = format_landing(true);
        assert!(logged_in.contains("Logout"));
        assert!(logged_in.contains("Tickets"));
        assert!(!logged_in.contains("Sign Up"));
    }

    #[test]
    fn test_login_screen_shows_errors() {
        let errors = LoginForm::new("x", "y").validate();
        let screen = format_login_screen(Some(&errors));
        assert!(screen.contains("Please enter a valid email address."));
        assert!(screen.contains("Password must be at least 8 characters."));
    }

    #[test]
    fn test_signup_success_shows_test_credentials() {
        let errors = SignupForm::new("Ada", "a@b.c", "password1", "password1").validate();
        let screen = format_signup_screen(Some(&errors));
        assert!(screen.contains(TEST_EMAIL));
        assert!(screen.contains(TEST_PASSWORD));
    }

    #[test]
    fn test_dashboard_lists_static_stats() {
        let screen = format_dashboard(&Dashboard::build(&TicketCollection::seeded("TKT")));
        for expected in ["Total Tickets", "2,350", "450", "210", "1,690", "Manage Tickets"] {
            assert!(screen.contains(expected), "missing {expected}");
        }
    }
}
