//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the Resolv home directory
//! and includes:
//! - The prefix used for generated ticket ids
//! - Whether the ticket screen starts with the built-in seed tickets
//! - Whether CLI output is colored

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ResolvError, Result};
use crate::paths::config_path;
use crate::types::DEFAULT_ID_PREFIX;

/// Keys accepted by `resolv config set`
pub const CONFIG_KEYS: &[&str] = &["id_prefix", "load_seed", "color"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for generated ticket ids (default: TKT)
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Start the ticket screen with the seed tickets (default: true)
    #[serde(default = "default_true")]
    pub load_seed: bool,

    /// Colored CLI output (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            load_seed: true,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the file without validating values, so `config set` can repair it
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ResolvError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ResolvError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            ResolvError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;
        Ok(())
    }

    /// Reject values the ticket id generator cannot work with
    pub fn validate(&self) -> Result<()> {
        let prefix = self.id_prefix.as_str();
        if prefix.is_empty() {
            return Err(ResolvError::Config(
                "id_prefix cannot be empty".to_string(),
            ));
        }
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ResolvError::Config(format!(
                "id_prefix '{prefix}' may only contain letters and digits"
            )));
        }
        Ok(())
    }

    /// Update a single key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "id_prefix" => self.id_prefix = value.trim().to_string(),
            "load_seed" => self.load_seed = parse_bool(key, value)?,
            "color" => self.color = parse_bool(key, value)?,
            _ => {
                return Err(ResolvError::Config(format!(
                    "unknown key '{key}'. Valid keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        self.validate()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ResolvError::Config(format!(
            "'{value}' is not a boolean value for {key}"
        ))),
    }
}
