use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "FFM_";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

/// How the `ffm` binary renders a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON for the `record` format.
    pub pretty: bool,
}

/// Rendering selected for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Natural-language description.
    #[default]
    Sentence,
    /// Compact `FFM[...]` string.
    Text,
    /// Structured record as JSON.
    Record,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/ffm-personality/config.toml`, then
    /// `FFM_`-prefixed environment variables (`FFM_OUTPUT__FORMAT=text`).
    /// A missing file is not an error; an unparseable source is returned to
    /// the caller, which decides whether to fall back to `Default`.
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(Self::config_path())
    }

    /// Same as [`AppConfig::load`] with an explicit config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        let path = path.as_ref();
        let config = Self::figment(path).extract()?;
        log::debug!("Loaded config (file: {})", path.display());
        Ok(config)
    }

    /// Like [`AppConfig::load`], but falls back to `Default` and hands back
    /// the load error so it can be logged once logging is up.
    pub fn load_or_default() -> (Self, Option<figment::Error>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Layered sources: defaults, then the TOML file, then the environment.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("ffm-personality").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
