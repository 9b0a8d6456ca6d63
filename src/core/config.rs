//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stockpile/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StockpileConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stockpile/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stockpile").join("config.toml"))
}

/// Load config from `~/.stockpile/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StockpileConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StockpileConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StockpileConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StockpileConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: StockpileConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Stockpile Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# base_url = "http://localhost:5000/api"   # Or set STOCKPILE_BASE_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &StockpileConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STOCKPILE_BASE_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig { base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = StockpileConfig::default();
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_default_when_empty() {
        let config = StockpileConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_config_value_overrides_default() {
        let config = StockpileConfig {
            server: ServerConfig {
                base_url: Some("http://inventory.local/api".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, "http://inventory.local/api");
    }

    #[test]
    fn test_resolve_cli_flag_wins() {
        let config = StockpileConfig {
            server: ServerConfig {
                base_url: Some("http://inventory.local/api".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://127.0.0.1:9000/api"));
        assert_eq!(resolved.base_url, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[server]
base_url = "http://192.168.1.20:5000/api"
"#;
        let config: StockpileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://192.168.1.20:5000/api")
        );
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: StockpileConfig = toml::from_str("").unwrap();
        assert!(config.server.base_url.is_none());
    }
}
