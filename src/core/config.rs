//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shorty/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::clipboard::DEFAULT_FEEDBACK_DELAY;
use crate::{ClipboardBackend, Page};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShortyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<Page>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClipboardConfig {
    pub backend: Option<ClipboardBackend>,
    pub feedback_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "shorty.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_page: Page,
    pub clipboard_backend: ClipboardBackend,
    pub feedback_delay: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Values that were ignored while resolving. Logged by the caller once
    /// the logger exists.
    pub warnings: Vec<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub clipboard: Option<ClipboardBackend>,
    pub page: Option<Page>,
    pub feedback_ms: Option<u64>,
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

/// Returns the path to `~/.shorty/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shorty").join("config.toml"))
}

/// Load config from `~/.shorty/config.toml`.
///
/// A missing file (or no home directory) yields `ShortyConfig::default()`.
/// A malformed file returns `ConfigError::Parse`. Nothing is written here;
/// see [`ensure_default_config`].
pub fn load_config() -> Result<ShortyConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(ShortyConfig::default()),
    }
}

/// Load config from an explicit path. Same semantics as [`load_config`].
pub fn load_config_from(path: &Path) -> Result<ShortyConfig, ConfigError> {
    if !path.exists() {
        return Ok(ShortyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ShortyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Write a commented-out default config at `path` unless one exists.
///
/// Returns `true` if a file was written. Called once logging is up, so the
/// outcome ends up in the log.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let default_content = r#"# shorty configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = "home"                # "home" or "about"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "shorty.log"            # Or set SHORTY_LOG_FILE env var

# [clipboard]
# backend = "system"                 # "system" or "memory"; or set SHORTY_CLIPBOARD
# feedback_ms = 2000                 # How long "Copied!" stays up; or set SHORTY_FEEDBACK_MS
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    fs::write(path, default_content).map_err(ConfigError::Io)?;
    info!("No config file found, generated default at {}", path.display());
    Ok(true)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ShortyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ShortyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Clipboard backend: CLI → env → config → default
    let clipboard_backend = cli
        .clipboard
        .or_else(|| {
            env("SHORTY_CLIPBOARD").and_then(|s| match ClipboardBackend::from_str(&s, true) {
                Ok(backend) => Some(backend),
                Err(_) => {
                    warnings.push(format!("Ignoring unknown SHORTY_CLIPBOARD value: {s}"));
                    None
                }
            })
        })
        .or(config.clipboard.backend)
        .unwrap_or_default();

    // Feedback delay: CLI → env → config → default
    let feedback_delay = cli
        .feedback_ms
        .or_else(|| {
            env("SHORTY_FEEDBACK_MS").and_then(|s| match s.trim().parse() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    warnings.push(format!("Ignoring invalid SHORTY_FEEDBACK_MS value: {s}"));
                    None
                }
            })
        })
        .or(config.clipboard.feedback_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_FEEDBACK_DELAY);

    // Start page: CLI → config → default
    let start_page = cli.page.or(config.general.start_page).unwrap_or_default();

    // Log file: env → config → default
    let log_file = env("SHORTY_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into();

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse::<LevelFilter>().unwrap_or_else(|_| {
            warnings.push(format!("Ignoring unknown log_level: {level}"));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        start_page,
        clipboard_backend,
        feedback_delay,
        log_level,
        log_file,
        warnings,
    }
}
