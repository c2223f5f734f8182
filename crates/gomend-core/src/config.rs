use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gomend_util::errors::GomendError;

/// Global user configuration loaded from `~/.gomend/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub tidy: TidyConfig,
}

/// Manifest lookup settings from `[manifest]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_name")]
    pub name: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: default_manifest_name(),
        }
    }
}

fn default_manifest_name() -> String {
    "go.mod".to_string()
}

/// Post-repair cleanup command from `[tidy]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TidyConfig {
    #[serde(default = "default_tidy_enabled")]
    pub enabled: bool,
    #[serde(default = "default_tidy_program")]
    pub program: String,
    #[serde(default = "default_tidy_args")]
    pub args: Vec<String>,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            enabled: default_tidy_enabled(),
            program: default_tidy_program(),
            args: default_tidy_args(),
        }
    }
}

fn default_tidy_enabled() -> bool {
    true
}

fn default_tidy_program() -> String {
    "go".to_string()
}

fn default_tidy_args() -> Vec<String> {
    vec!["mod".to_string(), "tidy".to_string()]
}

impl GlobalConfig {
    /// Load the global configuration from `~/.gomend/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| GomendError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            GomendError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the gomend data directory (`~/.gomend/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".gomend")
}
