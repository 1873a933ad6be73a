//! Configuration loading and config file resolution
//!
//! Bootstrap configuration is a small TOML file. Resolution order for the
//! file itself:
//! 1. Command-line argument (highest priority)
//! 2. `SYNCOMP_CONFIG` environment variable
//! 3. Platform config directory (`<config dir>/syncomp/config.toml`)
//! 4. Compiled defaults (fallback)
//!
//! A missing file never stops startup; the compiled defaults are used
//! instead. A file that exists but cannot be read or parsed is an error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SYNCOMP_CONFIG";

/// Environment variable overriding `logging.level`
pub const LOG_LEVEL_ENV_VAR: &str = "SYNCOMP_LOG_LEVEL";

/// Number of text characters kept in a saved text record unless configured
pub const DEFAULT_TEXT_EXCERPT_CHARS: usize = 200;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Session and library configuration (optional)
    #[serde(default)]
    pub session: SessionConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Characters of the source text kept in a saved text record
    #[serde(default = "default_text_excerpt_chars")]
    pub text_excerpt_chars: usize,

    /// Where the composition library is stored (optional)
    #[serde(default)]
    pub library_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            text_excerpt_chars: default_text_excerpt_chars(),
            library_path: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_text_excerpt_chars() -> usize {
    DEFAULT_TEXT_EXCERPT_CHARS
}

impl TomlConfig {
    /// Library path from config, or the platform default
    pub fn library_path(&self) -> PathBuf {
        self.session
            .library_path
            .clone()
            .unwrap_or_else(|| CompiledDefaults::for_current_platform().library_path)
    }

    /// Apply environment variable overrides (currently only the log level)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV_VAR) {
            if !level.trim().is_empty() {
                debug!("Log level overridden by {}: {}", LOG_LEVEL_ENV_VAR, level);
                self.logging.level = level;
            }
        }
        self.normalize();
    }

    /// Trim and lowercase the log level so "INFO" and " info" both validate
    pub fn normalize(&mut self) {
        self.logging.level = self.logging.level.trim().to_lowercase();
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level '{}' (expected one of: {})",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }
        if self.session.text_excerpt_chars == 0 {
            return Err(Error::Config(
                "session.text_excerpt_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// OS-dependent compiled defaults
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub library_path: PathBuf,
}

impl CompiledDefaults {
    /// Defaults for the platform this binary was built for
    pub fn for_current_platform() -> Self {
        // ~/.local/share/syncomp on Linux, ~/Library/Application Support/syncomp
        // on macOS, %LOCALAPPDATA%\syncomp on Windows
        let data_dir = dirs::data_local_dir()
            .map(|d| d.join("syncomp"))
            .unwrap_or_else(|| PathBuf::from("./syncomp_data"));

        Self {
            library_path: data_dir.join("library.json"),
        }
    }
}

/// Where the resolved config file path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine,
    Environment,
    PlatformDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CommandLine => write!(f, "command line"),
            ConfigSource::Environment => write!(f, "environment"),
            ConfigSource::PlatformDefault => write!(f, "platform config directory"),
        }
    }
}

/// Resolves and loads the bootstrap configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver; `cli_path` is the `--config` argument if given
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Candidate config file path, highest priority first
    pub fn config_path(&self) -> Option<(PathBuf, ConfigSource)> {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return Some((path.clone(), ConfigSource::CommandLine));
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some((PathBuf::from(path), ConfigSource::Environment));
            }
        }

        // Priority 3: Platform config directory
        dirs::config_dir().map(|d| {
            (
                d.join("syncomp").join("config.toml"),
                ConfigSource::PlatformDefault,
            )
        })
    }

    /// Load configuration, falling back to compiled defaults
    ///
    /// Environment overrides are applied and the result is validated.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match self.config_path() {
            Some((path, source)) if path.exists() => {
                info!("Loading config from {} ({})", path.display(), source);
                load_toml_config(&path)?
            }
            Some((path, ConfigSource::PlatformDefault)) => {
                debug!("No config at {}, using defaults", path.display());
                TomlConfig::default()
            }
            Some((path, source)) => {
                warn!(
                    "Config file {} ({}) not found, using defaults",
                    path.display(),
                    source
                );
                TomlConfig::default()
            }
            None => {
                debug!("No config directory on this platform, using defaults");
                TomlConfig::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let mut config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;
    config.normalize();
    Ok(config)
}
