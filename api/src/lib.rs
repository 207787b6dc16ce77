//! UI-free model of the currency selector: the catalog, the selection store
//! and the diff rules that turn a selection change into callbacks.

pub mod catalog;
pub mod currency_entity;
pub mod diff;
pub mod fiat_currency;
pub mod prefs;
pub mod selection;

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use currency_entity::CurrencyEntity;
pub use diff::DiffError;
pub use diff::DiffPolicy;
pub use diff::SelectionChange;
pub use diff::SelectionDelta;
pub use selection::SelectionSet;
pub use selection::SelectionStore;
