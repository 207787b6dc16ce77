use std::path::PathBuf;

use dioxus_logger::tracing::warn;

use crate::catalog::Catalog;

/// Where the demo app gets its currency list from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The built-in nine-currency list, ids "1".."9".
    #[default]
    Fixture,
    /// Every supported fiat currency, keyed by ISO code.
    Fiat,
    /// A JSON file holding an array of `{id, name}`.
    File(PathBuf),
}

impl CatalogSource {
    /// `fixture` and `fiat` select the built-in lists; anything else is a path.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            v if v.eq_ignore_ascii_case("fixture") || v.is_empty() => Self::Fixture,
            v if v.eq_ignore_ascii_case("fiat") => Self::Fiat,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Builds the catalog. A file that cannot be loaded falls back to the fixture.
    pub fn catalog(&self) -> Catalog {
        match self {
            Self::Fixture => Catalog::fixture(),
            Self::Fiat => Catalog::fiat(),
            Self::File(path) => Catalog::load(path).unwrap_or_else(|e| {
                warn!("Falling back to built-in catalog, {}: {}", path.display(), e);
                Catalog::fixture()
            }),
        }
    }
}
