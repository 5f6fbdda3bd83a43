//! Layered configuration for the MangaDex source.
//!
//! Values are merged, later layers winning:
//! 1. built-in defaults
//! 2. a configuration file (TOML, YAML or JSON)
//! 3. `MDX_`-prefixed environment variables, with `__` separating nested
//!    keys (`MDX_LANGUAGE=fr`, `MDX_SOURCE__REQUESTS_PER_SECOND=2`,
//!    `MDX_CONTENT_RATINGS__SAFE=true`)

pub mod error;
mod preferences;
mod source;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};
pub use crate::preferences::Preferences;
pub use crate::source::{DEFAULT_API_BASE_URL, SourceConfig};

pub const ENV_PREFIX: &str = "MDX_";
const FILE_STEM: &str = "config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub preferences: Preferences,
    pub source: SourceConfig,
}
impl Config {
    /// Loads configuration from the platform config directory (if a
    /// `config.{toml,yaml,yml,json}` exists there) and the environment.
    #[instrument]
    pub fn load() -> Result<Self> {
        let mut figment = Self::defaults();
        if let Some(dir) = config_dir() {
            for ext in ["toml", "yaml", "yml", "json"] {
                let path = dir.join(format!("{FILE_STEM}.{ext}"));
                if path.is_file() {
                    tracing::debug!(path = %path.display(), "Found configuration file");
                    figment = figment.merge(provider(&path)?);
                }
            }
        }
        Self::extract(figment.merge(Self::env()))
    }

    /// Loads configuration from an explicit file (which must exist) and the
    /// environment.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        Self::extract(Self::defaults().merge(provider(path)?).merge(Self::env()))
    }

    /// Extracts and validates configuration from an arbitrary figment, for
    /// hosts that assemble their own providers.
    pub fn extract(figment: Figment) -> Result<Self> {
        let config: Self = match figment.extract() {
            Ok(config) => config,
            Err(err) => exn::bail!(ErrorKind::Load(err.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.requests_per_second == 0 {
            exn::bail!(ErrorKind::InvalidValue {
                field: "source.requests_per_second",
                value: "0".to_string(),
            });
        }
        let url = &self.source.api_base_url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            exn::bail!(ErrorKind::InvalidValue {
                field: "source.api_base_url",
                value: url.clone(),
            });
        }
        if let Some(id) = self.preferences.unknown_ratings().next() {
            exn::bail!(ErrorKind::InvalidValue {
                field: "content_ratings",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}

/// Platform configuration directory, e.g. `~/.config/mdx` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "mangadex", "mdx").map(|dirs| dirs.config_dir().to_path_buf())
}

fn provider(path: &Path) -> Result<Figment> {
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    Ok(match extension.as_deref() {
        Some("toml") => Figment::from(Toml::file(path)),
        Some("yaml" | "yml") => Figment::from(Yaml::file(path)),
        Some("json") => Figment::from(Json::file(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
    })
}
