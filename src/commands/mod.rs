mod auth;
mod config;
mod dashboard;
mod landing;
mod open;
mod tickets;

pub use auth::{cmd_login, cmd_logout, cmd_signup};
pub use config::{cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use landing::cmd_landing;
pub use open::{cmd_open, require_route};
pub use tickets::{cmd_tickets, cmd_tickets_ls};

use serde_json::Value;

use crate::error::Result;

/// Output of a command, printable either as text or JSON
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    /// Text shown when JSON output is not requested
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
