//! Colored CLI output
//!
//! All coloring goes through `if_supports_color`, so piping output or
//! setting `color: false` in the config yields plain text.

use owo_colors::{OwoColorize, Stream};

use crate::types::{Ticket, TicketPriority, TicketStatus};

pub mod screens;

pub use screens::{format_dashboard, format_landing, format_login_screen, format_signup_screen};

/// Fallback body for tickets without a description
pub const NO_DESCRIPTION: &str = "No description provided.";

pub fn cyan(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
}

pub fn green(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

pub fn yellow(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string()
}

pub fn red(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.red()).to_string()
}

pub fn dimmed(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
}

pub fn bold(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
}

/// Status text as shown on a card: underscores become spaces
pub fn status_text(status: TicketStatus) -> String {
    status.to_string().replace('_', " ")
}

pub fn format_status_colored(status: TicketStatus) -> String {
    let badge = format!("[{}]", status_text(status));
    match status {
        TicketStatus::Open => green(&badge),
        TicketStatus::InProgress => yellow(&badge),
        TicketStatus::Closed => dimmed(&badge),
    }
}

pub fn format_priority_colored(priority: TicketPriority) -> String {
    let text = format!("Priority: {priority}");
    match priority {
        TicketPriority::High => red(&text),
        TicketPriority::Medium => yellow(&text),
        TicketPriority::Low => text,
    }
}

/// Multi-line card: title and status, description, priority
pub fn format_ticket_card(ticket: &Ticket) -> String {
    let description = ticket.description.as_deref().unwrap_or(NO_DESCRIPTION);
    format!(
        "{} {}  {}\n  {}\n  {}",
        cyan(&ticket.id),
        bold(&ticket.title),
        format_status_colored(ticket.status),
        description,
        format_priority_colored(ticket.priority)
    )
}

/// Field errors, one per line, each under its label
pub fn format_field_errors<L, M>(errors: impl IntoIterator<Item = (L, M)>) -> String
where
    L: std::fmt::Display,
    M: std::fmt::Display,
{
    errors
        .into_iter()
        .map(|(label, message)| format!("  {}: {}", label, red(&message.to_string())))
        .collect::<Vec<_>>()
        .join("\n")
}
