//! Components that make up the currency selector.
pub mod currency_item;
pub mod currency_selector;
pub mod selected_currency;
