//! Configuration loading.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`blue1.toml` shipped with the workspace)
//! 2. `~/.config/blue1/blue1.toml`
//! 3. `./blue1.toml`
//! 4. `BLUE1_<SECTION>__<KEY>` environment variables

use blue1_error::{Blue1Error, Blue1Result, ConfigError};
use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../blue1.toml");

const APP_DIR: &str = "blue1";

/// `[tba]`: the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct TbaConfig {
    /// Root of the API
    base_url: String,
    /// Name of the environment variable holding the API token
    token_env: String,
    /// Client side throttle for live requests
    #[serde(default)]
    requests_per_minute: Option<u32>,
}

/// `[cache]`: the response cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct CacheConfig {
    /// Cache file, defaults under the user cache directory
    #[serde(default)]
    path: Option<PathBuf>,
    /// Expiration used until an operator sets one
    #[serde(default)]
    default_ttl_seconds: Option<u64>,
}

/// `[state]`: operator state such as the expiration time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct StateConfig {
    /// State file, defaults under the user state directory
    #[serde(default)]
    path: Option<PathBuf>,
}

/// Top-level blue1 configuration.
///
/// # Example
///
/// ```no_run
/// use blue1_tba::Blue1Config;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Blue1Config::load()?;
/// println!("Caching responses in {}", config.cache_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct Blue1Config {
    /// Upstream API settings
    tba: TbaConfig,
    /// Cache settings
    #[serde(default)]
    cache: CacheConfig,
    /// State settings
    #[serde(default)]
    state: StateConfig,
}

fn build_error(e: config::ConfigError) -> Blue1Error {
    ConfigError::new("configuration sources", format!("Failed to read: {}", e)).into()
}

fn parse_error(e: config::ConfigError) -> Blue1Error {
    ConfigError::new("configuration values", format!("Failed to parse: {}", e)).into()
}

impl Blue1Config {
    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bundled file does not parse.
    pub fn bundled() -> Blue1Result<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)
    }

    /// Bundled defaults overridden by one file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Blue1Result<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                Blue1Error::from(ConfigError::new(
                    path.as_ref().display().to_string(),
                    format!("Failed to read: {}", e),
                ))
            })?
            .try_deserialize()
            .map_err(parse_error)
    }

    /// Load configuration from every source.
    ///
    /// User files are optional and skipped when missing.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present source fails to parse.
    #[instrument]
    pub fn load() -> Blue1Result<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join(APP_DIR).join("blue1.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("blue1").required(false))
            .add_source(
                Environment::with_prefix("BLUE1")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)
    }

    /// Cache file location.
    pub fn cache_path(&self) -> PathBuf {
        self.cache.path.clone().unwrap_or_else(|| {
            default_dir(dirs::cache_dir()).join("cache.json")
        })
    }

    /// State file location.
    pub fn state_path(&self) -> PathBuf {
        self.state.path.clone().unwrap_or_else(|| {
            default_dir(dirs::state_dir().or_else(dirs::data_local_dir)).join("state.json")
        })
    }

    /// Expiration used when the state file holds none.
    pub fn default_ttl(&self) -> Option<Duration> {
        self.cache.default_ttl_seconds.map(Duration::from_secs)
    }

    /// Read the API token from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or empty.
    pub fn token(&self) -> Blue1Result<String> {
        match std::env::var(&self.tba.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::new(
                &self.tba.token_env,
                "No API token: set it to your The Blue Alliance read key",
            )
            .into()),
        }
    }
}

/// `<base>/blue1`, or `./.blue1` when the platform has no such directory.
fn default_dir(base: Option<PathBuf>) -> PathBuf {
    match base {
        Some(base) => base.join(APP_DIR),
        None => PathBuf::from(format!(".{APP_DIR}")),
    }
}
