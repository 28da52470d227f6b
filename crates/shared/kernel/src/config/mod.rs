use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "enrol";

/// Prefix for environment overrides (`ENROL__ADMINISTRATOR`, `ENROL__LOG__LEVEL`, ...).
pub const ENV_PREFIX: &str = "ENROL";

/// Errors raised while assembling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to build config from {}: {source}", path.display())]
    Build { path: PathBuf, source: config::ConfigError },

    #[error("Failed to deserialize config from {}: {source}", path.display())]
    Deserialize { path: PathBuf, source: config::ConfigError },
}

/// Loads configuration from an optional file overlaid with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path`, which must exist, or else [`DEFAULT_CONFIG_NAME`] in the working
///    directory, which may be absent. The format is inferred from the extension
///    (`enrol.toml`, `enrol.yaml`, ...).
/// 2. **Environment Overrides**: variables prefixed with `ENROL__`, nested with `__`
///    (e.g., `ENROL__REGISTRY__CASCADE_UNIT_REMOVAL=true` maps to `registry.cascade_unit_removal`).
///
/// Fields missing from every layer fall back to `T`'s serde defaults.
///
/// # Errors
/// Returns an error if an explicit `path` is missing, if the file cannot be parsed, or if the
/// merged values do not match the structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let explicit = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(explicit))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .map_err(|source| ConfigError::Build { path: effective_path.clone(), source })?;

    debug!(path = %effective_path.display(), "Config sources merged");

    config
        .try_deserialize::<T>()
        .map_err(|source| ConfigError::Deserialize { path: effective_path, source })
}
