//! Launch-time preferences for the demo app, read from environment variables.

pub mod catalog_source;
pub mod selector_prefs;

pub use catalog_source::CatalogSource;
pub use selector_prefs::SelectorPrefs;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefsError {
    #[error("unknown diff policy '{0}', expected 'set' or 'length'")]
    UnknownDiffPolicy(String),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}
