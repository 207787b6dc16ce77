use api::CurrencyEntity;
use dioxus::prelude::*;

/// One checkbox in the selectable grid. The whole label is clickable.
///
/// The listener sits on the input's click: a label click is forwarded there,
/// and the next state comes from membership rather than the DOM's checked flag.
#[component]
pub fn CurrencyItem(currency: CurrencyEntity, checked: bool, on_toggle: EventHandler<String>) -> Element {
    let id = currency.id.clone();

    rsx! {
        label {
            class: "currency-item",
            "data-testid": "currency-item-{currency.id}",
            input {
                r#type: "checkbox",
                id: "{currency.id}",
                checked,
                onclick: move |_| on_toggle.call(id.clone()),
            }
            "{currency.name}"
        }
    }
}
