//! Service configuration.
//!
//! Values are resolved in layers, each overriding the previous one:
//!
//! ```text
//! defaults -> YAML file (--config / ROSTER_CONFIG) -> ROSTER_* env vars -> CLI flags
//! ```
//!
//! A `.env` file in the working directory is loaded into the environment
//! before the env layer is read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::ConfigArgs;

/// Env var naming a YAML config file.
pub const ENV_CONFIG: &str = "ROSTER_CONFIG";
/// Env var overriding [`Config::host`].
pub const ENV_HOST: &str = "ROSTER_HOST";
/// Env var overriding [`Config::port`].
pub const ENV_PORT: &str = "ROSTER_PORT";
/// Env var overriding [`Config::log_filter`].
pub const ENV_LOG: &str = "ROSTER_LOG";
/// Env var overriding [`Config::expose_test_routes`].
pub const ENV_TEST_ROUTES: &str = "ROSTER_TEST_ROUTES";

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`Config`].
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// File that was requested.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// An environment variable holds a value of the wrong shape.
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// The resolved config could not be rendered as YAML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind; 0 picks an ephemeral port.
    pub port: u16,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Mount `DELETE /__test__/reset`.
    pub expose_test_routes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            expose_test_routes: true,
        }
    }
}

impl Config {
    /// Resolves the full layer stack against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or an
    /// env var holds an invalid value.
    pub fn load(args: &ConfigArgs) -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::resolve(args, |var| std::env::var(var).ok())
    }

    /// Resolves the layer stack with a caller-supplied env lookup.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn resolve<F>(args: &ConfigArgs, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = args.config.clone().or_else(|| env(ENV_CONFIG).map(PathBuf::from));
        let base = match file {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(base.with_env(env)?.with_args(args))
    }

    /// Reads a YAML config file. Missing keys take their default.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Parses YAML text. Missing keys take their default.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the text is not a valid config.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Renders the config as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Applies `ROSTER_*` overrides from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] for an unparseable port or flag.
    pub fn with_env<F>(mut self, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = env(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = env(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_PORT, value: port })?;
        }
        if let Some(filter) = env(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Some(flag) = env(ENV_TEST_ROUTES) {
            self.expose_test_routes = parse_flag(&flag)
                .ok_or(ConfigError::InvalidEnv { var: ENV_TEST_ROUTES, value: flag })?;
        }
        Ok(self)
    }

    /// Applies CLI flag overrides.
    #[must_use]
    pub fn with_args(mut self, args: &ConfigArgs) -> Self {
        if let Some(host) = &args.host {
            self.host.clone_from(host);
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(filter) = &args.log {
            self.log_filter.clone_from(filter);
        }
        if args.no_test_routes {
            self.expose_test_routes = false;
        }
        self
    }

    /// The `host:port` string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
