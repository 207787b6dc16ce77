use api::CurrencyEntity;
use dioxus::prelude::*;

/// A chip for one selected currency, with an "X" control that asks for its removal.
#[component]
pub fn SelectedCurrency(currency: CurrencyEntity, on_close_click: EventHandler<String>) -> Element {
    let id = currency.id.clone();

    rsx! {
        div {
            class: "selected-currency",
            "data-testid": "selected-currency-{currency.id}",
            "{currency.name}"
            button {
                class: "close-selected",
                "data-testid": "close-selected-{currency.id}",
                "aria-label": "Remove {currency.name}",
                onclick: move |_| on_close_click.call(id.clone()),
                "X"
            }
        }
    }
}
