//! The ordered list of currencies a selector offers.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::currency_entity::CurrencyEntity;
use crate::fiat_currency::FiatCurrency;
use crate::selection::SelectionSet;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not a JSON array of {{id, name}}: {0}")]
    Json(#[from] serde_json::Error),

    #[error("currency id '{0}' appears more than once")]
    DuplicateId(String),
}

/// Ordered currency catalog. Insertion order is display order.
///
/// Ids are expected to be unique. `Catalog::new` takes the caller's word for
/// it; when they are not, every lookup resolves to the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<CurrencyEntity>);

impl Catalog {
    pub fn new(currencies: Vec<CurrencyEntity>) -> Self {
        Self(currencies)
    }

    /// The nine-entry catalog the demo app ships with: ids "1".."9".
    pub fn fixture() -> Self {
        ["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "SEK"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| CurrencyEntity::new((i + 1).to_string(), name))
            .collect()
    }

    /// Every supported fiat currency, keyed by ISO code.
    pub fn fiat() -> Self {
        FiatCurrency::all().map(CurrencyEntity::from).collect()
    }

    /// Parses a JSON array of `{id, name}` objects, rejecting duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        match self.0.iter().find(|c| !seen.insert(c.id.as_str())) {
            Some(dup) => Err(CatalogError::DuplicateId(dup.id.clone())),
            None => Ok(()),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyEntity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First currency with the given id.
    pub fn find(&self, id: &str) -> Option<&CurrencyEntity> {
        self.0.iter().find(|c| c.id == id)
    }

    /// Currencies whose id is in `selection`, in catalog order.
    pub fn selected_in(&self, selection: &SelectionSet) -> Vec<CurrencyEntity> {
        self.0
            .iter()
            .filter(|c| selection.contains(&c.id))
            .cloned()
            .collect()
    }

    /// First currency, in catalog order, whose id is missing from `selection`.
    pub fn first_absent_from(&self, selection: &SelectionSet) -> Option<&CurrencyEntity> {
        self.0.iter().find(|c| !selection.contains(&c.id))
    }
}

impl FromIterator<CurrencyEntity> for Catalog {
    fn from_iter<I: IntoIterator<Item = CurrencyEntity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<CurrencyEntity>> for Catalog {
    fn from(currencies: Vec<CurrencyEntity>) -> Self {
        Self::new(currencies)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CurrencyEntity;
    type IntoIter = std::slice::Iter<'a, CurrencyEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
