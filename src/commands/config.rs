//! Configuration commands for managing Resolv settings.
//!
//! - `config set`: Set a configuration value
//! - `config show`: Display current configuration

use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::display::{bold, cyan};
use crate::error::Result;
use crate::paths::config_path;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = config_path();

    let mut text = format!("{}\n\n", bold(&cyan("Configuration:")));
    text.push_str(&format!("{}: {}\n", cyan("id_prefix"), config.id_prefix));
    text.push_str(&format!("{}: {}\n", cyan("load_seed"), config.load_seed));
    text.push_str(&format!("{}: {}\n", cyan("color"), config.color));
    text.push_str(&format!("\nConfig file: {}", path.display()));

    CommandOutput::new(json!({
        "id_prefix": config.id_prefix,
        "load_seed": config.load_seed,
        "color": config.color,
        "config_file": path.to_string_lossy(),
    }))
    .with_text(text)
    .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::read_from(&config_path())?;
    config.set(key, value)?;
    config.save()?;
    tracing::info!("Config key '{}' updated", key);

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    }))
    .with_text(format!("Set {} = {}", cyan(key), value))
    .print(output_json)
}
