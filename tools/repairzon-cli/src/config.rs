//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["repairzon.toml", ".repairzon.toml", "repairzon.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,

    /// Checkout behaviour.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, picking the format from the file name.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Log output settings. `RUST_LOG` overrides `level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Filter directive (e.g. "warn", "repairzon_commerce=debug").
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format.
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Ask before placing an order on an interactive terminal.
    #[serde(default = "default_true")]
    pub confirm: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self { confirm: true }
    }
}

/// Generate a default repairzon.toml config file.
pub fn generate_default_config() -> String {
    r#"# Repairzon CLI configuration

[catalog]
# JSON catalog file; the built-in demo catalog is used when unset.
# path = "catalog.json"

[log]
# Overridden by RUST_LOG. --verbose forces "debug".
level = "warn"
# "human" or "json"
format = "human"

[checkout]
# Ask before placing an order on an interactive terminal.
confirm = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse("repairzon.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = CliConfig::parse(
            "repairzon.toml",
            "[catalog]\npath = \"shop.json\"\n[log]\nformat = \"json\"\n",
        )
        .unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("shop.json"));
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.level, "warn");
        assert!(config.checkout.confirm);
    }

    #[test]
    fn test_json_config() {
        let config =
            CliConfig::parse("repairzon.json", r#"{"checkout": {"confirm": false}}"#).unwrap();
        assert!(!config.checkout.confirm);
    }

    #[test]
    fn test_bad_config_names_file() {
        let err = CliConfig::parse("broken.toml", "[log\nlevel=").unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
