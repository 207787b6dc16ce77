//! A single selectable currency as supplied by the caller.

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_currency::FiatCurrency;

/// A currency option: a stable caller-supplied `id` plus a display `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyEntity {
    pub id: String,
    pub name: String,
}

impl CurrencyEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<FiatCurrency> for CurrencyEntity {
    fn from(currency: FiatCurrency) -> Self {
        Self::new(currency.code(), currency.code())
    }
}
