//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.parley/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::session::Mode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// "ai" or "human" - skips the landing screen when set.
    pub default_mode: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_BASE_URL: &str = "http://localhost:8000";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub server_base_url: String,
    /// Mode to enter directly, bypassing the landing screen.
    pub default_mode: Option<Mode>,
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

/// Returns the path to `~/.parley/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".parley").join("config.toml"))
}

/// Load config from `~/.parley/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ParleyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ParleyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ParleyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ParleyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ParleyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Parley Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_mode = "ai"                # "ai" or "human"; skips the landing screen

# [server]
# base_url = "http://localhost:8000" # The chat server origin
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_server` and `cli_mode` come from CLI flags (None = not specified).
pub fn resolve(
    config: &ParleyConfig,
    cli_server: Option<&str>,
    cli_mode: Option<Mode>,
) -> ResolvedConfig {
    // Server: CLI → env → config → default
    let server_base_url = cli_server
        .map(|s| s.to_string())
        .or_else(|| std::env::var("PARLEY_SERVER_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_BASE_URL.to_string());

    // Mode: CLI → env → config → none (show the landing screen)
    let default_mode = cli_mode
        .or_else(|| std::env::var("PARLEY_MODE").ok().as_deref().and_then(parse_mode))
        .or_else(|| config.general.default_mode.as_deref().and_then(parse_mode));

    ResolvedConfig {
        server_base_url,
        default_mode,
    }
}

/// Parse a mode name from config or env. Unknown values are ignored
/// (the landing screen shows), not an error.
fn parse_mode(s: &str) -> Option<Mode> {
    match s.to_ascii_lowercase().as_str() {
        "ai" => Some(Mode::Ai),
        "human" => Some(Mode::Human),
        other => {
            warn!("Ignoring unknown mode {:?}", other);
            None
        }
    }
}
