//! Configuration structures for storage backends.
//!
//! This module provides TOML-based configuration for the depot backends. The
//! configuration system supports:
//! - Bundled defaults (include_str! from depot.toml)
//! - User overrides (./depot.toml or ~/.config/depot/depot.toml)
//! - Environment variable overrides (DEPOT_* with `__` as the nesting
//!   separator, e.g. DEPOT_BACKENDS__FILESYSTEM__PATH)

use config::{Config, Environment, File, FileFormat};
use depot_error::{ConfigError, DepotError, DepotResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Top-level depot configuration.
///
/// Validation of medium-specific requirements happens at backend
/// construction, not at load time: a configuration that only describes the
/// filesystem medium is valid even though its s3 section is absent.
///
/// # Example
///
/// ```toml
/// backend = "filesystem"
///
/// [backends.filesystem]
/// path = "/srv/depot/releases"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DepotConfig {
    /// Which storage medium serves releases ("filesystem", "s3", "github")
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Medium-specific settings
    #[serde(default)]
    pub backends: BackendsConfig,
}

fn default_backend() -> String {
    "filesystem".to_string()
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            backends: BackendsConfig::default(),
        }
    }
}

impl DepotConfig {
    /// Load configuration from layered sources.
    ///
    /// Precedence, lowest to highest: bundled defaults, home-directory
    /// override, current-directory override, DEPOT_* environment variables.
    pub fn load() -> DepotResult<Self> {
        debug!(
            "Loading configuration with precedence: env > current dir > home dir > bundled defaults"
        );

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../depot.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/depot/depot.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional)
        builder = builder.add_source(File::with_name("depot").required(false));

        // Environment variables take highest precedence. The prefix separator
        // must stay a single underscore or DEPOT_BACKENDS__FILESYSTEM__PATH
        // style variables never match.
        builder = builder.add_source(
            Environment::with_prefix("DEPOT")
                .prefix_separator("_")
                .separator("__"),
        );

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                DepotError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                DepotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

/// Per-medium configuration sections.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct BackendsConfig {
    /// Local filesystem medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<FilesystemConfig>,

    /// Object storage medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Config>,

    /// Hosted source-control releases medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConfig>,
}

/// Filesystem medium settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FilesystemConfig {
    /// Base directory holding one subdirectory per release tag
    pub path: PathBuf,
}

/// Object storage medium settings, consumed by the externally provided s3
/// backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct S3Config {
    /// Bucket holding release prefixes
    pub bucket: String,

    /// Bucket region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Access key id; the ambient credential chain is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// Secret access key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

/// Hosted-release medium settings, consumed by the externally provided
/// github backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GithubConfig {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repository: String,

    /// API token, required for private repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
