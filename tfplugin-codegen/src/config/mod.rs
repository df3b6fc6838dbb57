//! Configuration management for tfplugin-codegen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `TFPLUGIN_CODEGEN_` prefix, `__` for nesting)
//! 2. `./tfplugin-codegen.toml` (project)
//! 3. `~/.config/tfplugin-codegen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Environment variable format: `TFPLUGIN_CODEGEN_SECTION__FIELD_NAME`
//! - Example: `TFPLUGIN_CODEGEN_RENDER__TEMPLATE_DIR=./templates`
//! - Example: `TFPLUGIN_CODEGEN_LOGGING__JSON=true`
//!
//! # Example Configuration
//!
//! ```toml
//! [render]
//! template_dir = "./templates"
//! trim_blocks = true
//! lstrip_blocks = true
//!
//! [logging]
//! filter = "info,tfplugin_codegen=debug"
//! json = false
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TFPLUGIN_CODEGEN_";

/// Project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "./tfplugin-codegen.toml";

/// Template rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Directory whose files override the embedded templates by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Remove the first newline after a block tag
    pub trim_blocks: bool,
    /// Strip leading whitespace before a block tag
    pub lstrip_blocks: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            template_dir: None,
            trim_blocks: true,
            lstrip_blocks: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Template rendering settings
    #[serde(default)]
    pub render: RenderSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl GeneratorConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - A value has the wrong type
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tfplugin_codegen::config::GeneratorConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = GeneratorConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> anyhow::Result<Self> {
        let mut figment =
            Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - A value has the wrong type
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Recommended XDG path of the user configuration file
    ///
    /// # Example
    ///
    /// ```rust
    /// use tfplugin_codegen::config::GeneratorConfig;
    ///
    /// let path = GeneratorConfig::recommended_path();
    /// // Returns: ~/.config/tfplugin-codegen/config.toml
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join("tfplugin-codegen").join("config.toml"),
        )
    }
}
