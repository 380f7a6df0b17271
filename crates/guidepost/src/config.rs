//! Layered application settings.

use derive_getters::Getters;
use guidepost_error::{ConfigError, GuidepostResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "guidepost.toml";

/// Prefix for environment overrides, e.g. `GUIDEPOST_LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "GUIDEPOST";

/// Settings for the guidepost binary.
///
/// Sources, lowest precedence first: built-in defaults, the config file,
/// then `GUIDEPOST_*` environment variables. Command-line flags override
/// all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Settings {
    /// Guide file or directory opened when no path is given
    #[serde(default)]
    guide_path: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    log_level: String,
    /// Log file for the viewer; defaults to the user cache directory
    #[serde(default)]
    log_file: Option<PathBuf>,
    /// Treat validation warnings as failures
    strict_validation: bool,
    /// Section entered directly when the viewer starts
    #[serde(default)]
    start_section: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            guide_path: None,
            log_level: "info".to_string(),
            log_file: None,
            strict_validation: false,
            start_section: None,
        }
    }
}

impl Settings {
    /// Loads settings.
    ///
    /// An explicit `path` must exist; otherwise [`DEFAULT_CONFIG_FILE`] is
    /// read if present.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> GuidepostResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .set_default("log_level", "info")
            .and_then(|b| b.set_default("strict_validation", false))
            .map_err(|e| ConfigError::new(format!("Invalid default: {}", e)))?
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?
            .try_deserialize::<Settings>()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    /// Where the viewer writes its log.
    ///
    /// Falls back to `<cache dir>/guidepost/guidepost.log`, or `None` when the
    /// platform has no cache directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("guidepost").join("guidepost.log"))
        })
    }
}
