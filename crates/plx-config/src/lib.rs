//! # plx-config
//!
//! Layered configuration loading for PlatifyX using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PLATIFYX_*` prefix, `__` as separator)
//! 2. Externally supplied overrides ([`PlxConfig::load_with_env_overrides`])
//! 3. Project-level `.platifyx/config.toml`
//! 4. User-level `~/.config/platifyx/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PLATIFYX_API__BASE_URL` -> `api.base_url`,
//! `PLATIFYX_POLLING__INTERVAL_SECS` -> `polling.interval_secs`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use plx_config::PlxConfig;
//!
//! let config = PlxConfig::load_with_dotenv().expect("config");
//! println!("backend: {}/api/{}", config.api.base_url, config.api.version);
//! ```

mod api;
mod error;
mod general;
mod polling;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use polling::PollingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "PLATIFYX_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlxConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed into the
    /// config shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load configuration with `PLATIFYX_*`-style key/value overrides coming
    /// from somewhere other than the process environment (a secrets backend,
    /// a CI job definition). Process env vars still win over these.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        Self::figment_with_overrides(overrides)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".platifyx/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: External overrides
        for (key, value) in overrides {
            if let Some(path) = override_key_path(key) {
                let value = match value.parse::<Value>() {
                    Ok(parsed) => parsed,
                    Err(never) => match never {},
                };
                figment = figment.merge(Serialized::default(&path, value));
            }
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("platifyx").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

/// `PLATIFYX_API__BASE_URL` -> `api.base_url`. Keys without the prefix are ignored.
fn override_key_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PlxConfig::default();
        assert!(config.api.is_configured());
        assert_eq!(config.api.version, "v1");
        assert_eq!(config.polling.interval_secs, 3);
        assert_eq!(config.general.default_limit, 50);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = PlxConfig::figment();
        let config: PlxConfig = figment.extract().expect("should extract defaults");
        assert!(config.api.is_configured());
    }

    #[test]
    fn override_keys_map_to_dotted_paths() {
        assert_eq!(
            override_key_path("PLATIFYX_API__BASE_URL").as_deref(),
            Some("api.base_url")
        );
        assert_eq!(
            override_key_path("PLATIFYX_POLLING__MAX_ELAPSED_SECS").as_deref(),
            Some("polling.max_elapsed_secs")
        );
        assert_eq!(override_key_path("HOME"), None);
        assert_eq!(override_key_path("PLATIFYX_"), None);
    }
}
