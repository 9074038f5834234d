//! # kundli-config
//!
//! Layered configuration loading for Kundli using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KUNDLI_*` prefix, `__` as separator)
//! 2. Project-level `.kundli/config.toml`
//! 3. User-level `~/.config/kundli/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KUNDLI_POLICY__LAL_KITAB__ASCENDANT` -> `policy.lal_kitab.ascendant`.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Example
//!
//! ```toml
//! [policy.d1]
//! discipline = "full_names"
//! ascendant = "exempt"
//! ```

mod error;

pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use kundli_core::enums::ChartKind;
use kundli_core::policy::{ComparePolicy, PolicySet};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "KUNDLI_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KundliConfig {
    /// Comparison policy per chart kind.
    #[serde(default)]
    pub policy: PolicySet,
}

impl KundliConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// does not deserialize (e.g. an unknown ascendant policy name).
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".kundli/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Policy for one chart kind.
    #[must_use]
    pub const fn policy(&self, kind: ChartKind) -> ComparePolicy {
        self.policy.get(kind)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kundli").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors.
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
