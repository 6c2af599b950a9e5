//! Configuration management for the Mermaid MCP server.
//!
//! Parses `mermaid-mcp.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. A missing file is
//! not an error: every setting has a default.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `renderer.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mermaid-mcp.toml";

/// Public mermaid.ink endpoint.
const DEFAULT_BASE_URL: &str = "https://mermaid.ink";

/// Upper bound for either timeout, in seconds.
const MAX_TIMEOUT_SECS: u64 = 300;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override mermaid.ink base URL.
    pub base_url: Option<String>,
    /// Override conversion timeout in seconds.
    pub convert_timeout_secs: Option<u64>,
    /// Override syntax-check timeout in seconds.
    pub validate_timeout_secs: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Renderer configuration.
    pub renderer: RendererConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// mermaid.ink connection settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Base URL of the mermaid.ink service.
    pub base_url: String,
    /// Timeout for conversion requests, in seconds.
    pub convert_timeout_secs: u64,
    /// Timeout for syntax checks, in seconds.
    pub validate_timeout_secs: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            convert_timeout_secs: 30,
            validate_timeout_secs: 10,
        }
    }
}

impl RendererConfig {
    /// Timeout for conversion requests.
    #[must_use]
    pub fn convert_timeout(&self) -> Duration {
        Duration::from_secs(self.convert_timeout_secs)
    }

    /// Timeout for syntax checks.
    #[must_use]
    pub fn validate_timeout(&self) -> Duration {
        Duration::from_secs(self.validate_timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// A `${VAR}` reference could not be resolved.
    #[error("Cannot expand ${{{var}}} in {field}: {cause}")]
    EnvVar {
        /// Config field path, e.g. `renderer.base_url`.
        field: String,
        /// Variable named by the reference.
        var: String,
        /// Why the lookup failed.
        cause: std::env::VarError,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a timeout within `1..=MAX_TIMEOUT_SECS`.
fn require_timeout(secs: u64, field: &str) -> Result<(), ConfigError> {
    if secs == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "{field} cannot exceed {MAX_TIMEOUT_SECS}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mermaid-mcp.toml` in current directory and
    /// parents, falling back to defaults.
    ///
    /// CLI settings are applied after loading and take precedence over
    /// config file values. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.renderer.base_url.clone_from(base_url);
        }
        if let Some(secs) = settings.convert_timeout_secs {
            self.renderer.convert_timeout_secs = secs;
        }
        if let Some(secs) = settings.validate_timeout_secs {
            self.renderer.validate_timeout_secs = secs;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let renderer = &self.renderer;
        require_non_empty(&renderer.base_url, "renderer.base_url")?;
        require_http_url(&renderer.base_url, "renderer.base_url")?;
        require_timeout(
            renderer.convert_timeout_secs,
            "renderer.convert_timeout_secs",
        )?;
        require_timeout(
            renderer.validate_timeout_secs,
            "renderer.validate_timeout_secs",
        )?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_in_place("renderer.base_url", &mut self.renderer.base_url)
    }
}
