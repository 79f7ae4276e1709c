use crate::error::{LearnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 2] = ["output", "color"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LearnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LearnError::Config(format!(
                "Invalid output format: {} (expected text or json)",
                other
            ))),
        }
    }
}

/// Output preferences, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LearnConfig {
    #[serde(default)]
    pub output: OutputFormat,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for LearnConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl LearnConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LearnConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        tracing::info!(dir = %config_dir.display(), "config saved");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output" => Some(self.output.to_string()),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output" => self.output = value.parse()?,
            "color" => {
                self.color = value.parse().map_err(|_| {
                    LearnError::Config(format!("Invalid value for color: {}", value))
                })?
            }
            _ => return Err(LearnError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}
