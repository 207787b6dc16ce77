// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;

pub use components::currency_item::CurrencyItem;
pub use components::currency_selector::CurrencySelector;
pub use components::currency_selector::CurrencySelectorProps;
pub use components::currency_selector::CurrencySelectorView;
pub use components::selected_currency::SelectedCurrency;

use api::prefs::SelectorPrefs;
use api::CurrencyEntity;
use dioxus_logger::tracing::info;

/// Layout for the selector: a three-column chip row above a three-column grid.
pub const SELECTOR_CSS: &str = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        font-family: system-ui, sans-serif;
    }

    .currency-selector {
        display: flex;
        flex-direction: column;
        align-items: center;
    }

    .currency-selector-selected {
        width: 100%;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        margin-bottom: 1rem;
    }

    .currency-selector-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
    }

    .selected-currency {
        position: relative;
        padding: 0.75rem;
        border-radius: 0.25rem;
        background-color: #e2e8f0;
    }

    /* round "X" pinned to the chip's top right corner */
    .close-selected {
        position: absolute;
        top: -10px;
        right: -10px;
        width: 1.5rem;
        height: 1.5rem;
        padding: 0;
        line-height: 1;
        border: 1px solid #475569;
        border-radius: 9999px;
        color: white;
        background-color: #475569;
        box-shadow: 0 0 0 3px white;
        cursor: pointer;
    }

    .close-selected:hover {
        color: #475569;
        background-color: white;
    }

    .currency-item {
        padding: 1rem;
        border: 1px solid #d1d5db;
        border-radius: 0.375rem;
        cursor: pointer;
        transition: background-color 150ms;
    }

    .currency-item:hover { background-color: #e2e8f0; }
    .currency-item input { margin-right: 0.75rem; }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

/// Demo app: a selector over the configured catalog that logs every callback.
///
/// Settings come from a `SelectorPrefs` context provided by the launcher;
/// without one the defaults apply.
#[allow(non_snake_case)]
pub fn App() -> Element {
    let prefs = use_hook(|| try_consume_context::<SelectorPrefs>().unwrap_or_default());
    let catalog = use_hook(|| prefs.catalog_source.catalog());

    rsx! {
        style {
            "{SELECTOR_CSS}"
        }
        div {
            class: "app-main-container",
            CurrencySelector {
                currencies: catalog,
                diff_policy: prefs.diff_policy,
                on_change: move |currencies: Vec<CurrencyEntity>| info!("Changed {:?}", currencies),
                on_select: move |currency: CurrencyEntity| info!("Selected {:?}", currency),
                on_deselect: move |currency: CurrencyEntity| info!("Deselected {:?}", currency),
            }
        }
    }
}
