//! The fiat currencies offered by the built-in `fiat` catalog.

use strum::IntoEnumIterator;

/// ISO 4217 fiat currencies, declared in the order the `fiat` catalog lists them.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AED,
    ARS,
    AUD,
    BHD,
    BMD,
    BRL,
    CAD,
    CHF,
    CLP,
    CNY,
    CZK,
    DKK,
    EUR,
    GBP,
    GEL,
    HKD,
    HUF,
    IDR,
    ILS,
    INR,
    JPY,
    KRW,
    KWD,
    LKR,
    MXN,
    MYR,
    NGN,
    NOK,
    NZD,
    PHP,
    PKR,
    PLN,
    RON,
    SAR,
    SEK,
    SGD,
    THB,
    TRY,
    TWD,
    UAH,
    USD,
    VND,
    ZAR,
}

impl FiatCurrency {
    /// The ISO code, e.g. "USD". Provided by the `strum::IntoStaticStr` derive.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
