use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Custom error type for config loading.
#[georeg_derive::georeg_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Prefix of environment overrides, e.g. `GEOREG__VALIDATION__ENFORCE_REFERENCE_TARGETS=false`.
pub const ENV_PREFIX: &str = "GEOREG";

/// Loads configuration from an optional file and `GEOREG__*` environment overrides.
///
/// Every field of the registry configuration has a default, so running without a file is
/// normal: only the environment layer applies then. When a path is given the file must exist;
/// its format is inferred from the extension (TOML, JSON, YAML...).
///
/// Nested keys use double underscores: `GEOREG__PRESENTATION__MAX_PREVIEW_DEPTH=3` maps to
/// `presentation.max_preview_depth`.
///
/// # Errors
/// Fails when the given file cannot be read or the merged sources do not match `T`.
///
/// # Example
/// ```rust
/// use georeg_kernel::config::load_config;
/// use georeg_kernel::domain::config::RegistryConfig;
///
/// let cfg: RegistryConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.presentation.max_preview_depth > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    match path {
        Some(path) => {
            let path = path.as_ref();
            info!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        },
        None => info!("No config file given, using defaults and environment overrides"),
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
