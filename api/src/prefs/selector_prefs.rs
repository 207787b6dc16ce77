use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::warn;
use dioxus_logger::tracing::Level;

use super::CatalogSource;
use super::PrefsError;
use crate::diff::DiffPolicy;

/// Demo app settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorPrefs {
    pub catalog_source: CatalogSource,
    pub diff_policy: DiffPolicy,
    pub log_level: Level,
}

impl Default for SelectorPrefs {
    fn default() -> Self {
        Self {
            catalog_source: CatalogSource::default(),
            diff_policy: DiffPolicy::default(),
            log_level: Level::INFO,
        }
    }
}

impl SelectorPrefs {
    /// Reads settings from environment variables. Unset or unparseable
    /// values keep their defaults.
    ///
    /// # Environment Variables
    /// - `CURRENCY_CATALOG`: "fixture" (default), "fiat", or a path to a JSON
    ///   array of `{id, name}`.
    /// - `SELECTION_DIFF`: "set" (default) or "length".
    /// - `LOG_LEVEL`: "trace", "debug", "info" (default), "warn" or "error".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let catalog_source = lookup("CURRENCY_CATALOG")
            .map(|v| CatalogSource::parse(&v))
            .unwrap_or(defaults.catalog_source);

        let diff_policy = lookup("SELECTION_DIFF")
            .and_then(|v| parse_diff_policy(&v).map_err(|e| warn!("{}", e)).ok())
            .unwrap_or(defaults.diff_policy);

        let log_level = lookup("LOG_LEVEL")
            .and_then(|v| parse_log_level(&v).map_err(|e| warn!("{}", e)).ok())
            .unwrap_or(defaults.log_level);

        Self {
            catalog_source,
            diff_policy,
            log_level,
        }
    }
}

pub fn parse_diff_policy(value: &str) -> Result<DiffPolicy, PrefsError> {
    DiffPolicy::from_str(value.trim()).map_err(|_| PrefsError::UnknownDiffPolicy(value.to_string()))
}

pub fn parse_log_level(value: &str) -> Result<Level, PrefsError> {
    Level::from_str(value.trim()).map_err(|_| PrefsError::UnknownLogLevel(value.to_string()))
}
