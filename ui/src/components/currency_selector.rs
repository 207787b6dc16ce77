// ui/src/components/currency_selector.rs
#![allow(non_snake_case)]

use api::Catalog;
use api::CurrencyEntity;
use api::DiffPolicy;
use api::SelectionChange;
use api::SelectionDelta;
use api::SelectionSet;
use api::SelectionStore;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use super::currency_item::CurrencyItem;
use super::selected_currency::SelectedCurrency;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectorProps {
    /// The currencies to choose from, in display order.
    pub currencies: Catalog,
    /// Called after every change with the selected currencies, in catalog order.
    #[props(optional)]
    pub on_change: Option<EventHandler<Vec<CurrencyEntity>>>,
    /// Called with each currency that became selected.
    #[props(optional)]
    pub on_select: Option<EventHandler<CurrencyEntity>>,
    /// Called with each currency that became deselected.
    #[props(optional)]
    pub on_deselect: Option<EventHandler<CurrencyEntity>>,
    #[props(default)]
    pub diff_policy: DiffPolicy,
}

/// A multi-select list of currencies.
///
/// Owns its selection: it starts empty on mount and is gone on unmount.
/// Selected currencies show up as removable chips above a checkbox grid of
/// the whole catalog.
pub fn CurrencySelector(props: CurrencySelectorProps) -> Element {
    let mut store = use_signal(|| SelectionStore::new(props.diff_policy));

    let catalog = props.currencies.clone();
    let on_change = props.on_change;
    let on_select = props.on_select;
    let on_deselect = props.on_deselect;

    let selection = store.read().selection().clone();

    rsx! {
        CurrencySelectorView {
            currencies: props.currencies,
            selection,
            on_selection_change: move |next: SelectionSet| {
                let change = store.write().set_selection(next, &catalog);
                notify(change, on_change, on_select, on_deselect);
            },
        }
    }
}

/// Fires `on_change` first, then one select/deselect per delta.
fn notify(
    change: SelectionChange,
    on_change: Option<EventHandler<Vec<CurrencyEntity>>>,
    on_select: Option<EventHandler<CurrencyEntity>>,
    on_deselect: Option<EventHandler<CurrencyEntity>>,
) {
    if let Some(handler) = on_change {
        handler.call(change.selected);
    }
    for delta in change.deltas {
        debug!("currency {:?}", delta);
        match delta {
            SelectionDelta::Added(currency) => {
                if let Some(handler) = on_select {
                    handler.call(currency);
                }
            }
            SelectionDelta::Removed(currency) => {
                if let Some(handler) = on_deselect {
                    handler.call(currency);
                }
            }
        }
    }
}

/// Chip contents: selection order, ids missing from the catalog skipped.
pub fn selected_chips(currencies: &Catalog, selection: &SelectionSet) -> Vec<CurrencyEntity> {
    selection
        .iter()
        .filter_map(|id| currencies.find(id))
        .cloned()
        .collect()
}

/// Grid contents: catalog order, each paired with its checked state.
pub fn selectable_items(currencies: &Catalog, selection: &SelectionSet) -> Vec<(CurrencyEntity, bool)> {
    currencies
        .iter()
        .map(|currency| (currency.clone(), selection.contains(&currency.id)))
        .collect()
}

/// Stateless rendering of a catalog plus a selection.
///
/// Every interaction is reported as the complete next selection through
/// `on_selection_change`; nothing is stored here.
#[component]
pub fn CurrencySelectorView(
    currencies: Catalog,
    selection: SelectionSet,
    on_selection_change: EventHandler<SelectionSet>,
) -> Element {
    let chips = selected_chips(&currencies, &selection);
    let items = selectable_items(&currencies, &selection);

    rsx! {
        div {
            class: "currency-selector",
            "data-testid": "currency-selector",
            div {
                class: "currency-selector-selected",
                for currency in chips {
                    SelectedCurrency {
                        key: "{currency.id}",
                        currency,
                        on_close_click: {
                            let selection = selection.clone();
                            move |id: String| on_selection_change.call(selection.without(&id))
                        },
                    }
                }
            }
            div {
                class: "currency-selector-grid",
                for (currency, checked) in items {
                    CurrencyItem {
                        key: "{currency.id}",
                        currency,
                        checked,
                        on_toggle: {
                            let selection = selection.clone();
                            move |id: String| on_selection_change.call(selection.toggled(&id))
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::VirtualDom;

    fn render(selection: SelectionSet) -> String {
        fn harness(selection: SelectionSet) -> Element {
            rsx! {
                CurrencySelectorView {
                    currencies: Catalog::fixture(),
                    selection,
                    on_selection_change: move |_| {},
                }
            }
        }

        let mut dom = VirtualDom::new_with_props(harness, selection);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{needle}` not rendered in {html}"))
    }

    #[test]
    fn renders_root_and_every_catalog_item_in_order() {
        let html = render(SelectionSet::new());

        assert!(html.contains(r#"data-testid="currency-selector""#));
        assert_eq!(html.matches(r#"data-testid="currency-item-"#).count(), 9);

        let positions: Vec<_> = (1..=9)
            .map(|i| position(&html, &format!(r#"data-testid="currency-item-{i}""#)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(position(&html, "USD") < position(&html, "SEK"));
    }

    #[test]
    fn empty_selection_renders_no_chips() {
        let html = render(SelectionSet::new());
        assert!(!html.contains("selected-currency-"));
        assert!(!html.contains("close-selected-"));
    }

    #[test]
    fn chips_follow_selection_order_with_close_controls() {
        let html = render(SelectionSet::from(vec!["3", "1"]));

        assert_eq!(html.matches(r#"data-testid="selected-currency-"#).count(), 2);
        assert!(html.contains(r#"data-testid="close-selected-1""#));
        assert!(html.contains(r#"data-testid="close-selected-3""#));
        assert!(
            position(&html, r#"data-testid="selected-currency-3""#)
                < position(&html, r#"data-testid="selected-currency-1""#)
        );
        // chips sit above the grid
        assert!(
            position(&html, r#"data-testid="selected-currency-1""#)
                < position(&html, r#"data-testid="currency-item-1""#)
        );
    }

    #[test]
    fn every_currency_selected_renders_nine_chips() {
        let all: SelectionSet = Catalog::fixture().iter().map(|c| c.id.clone()).collect();
        let html = render(all);
        assert_eq!(html.matches(r#"data-testid="selected-currency-"#).count(), 9);
        assert_eq!(html.matches(r#"data-testid="close-selected-"#).count(), 9);
    }

    #[test]
    fn unknown_ids_render_no_chip() {
        let html = render(SelectionSet::from(vec!["nope"]));
        assert!(!html.contains("selected-currency-"));
    }

    #[test]
    fn chips_resolve_names_in_selection_order() {
        let chips = selected_chips(&Catalog::fixture(), &SelectionSet::from(vec!["9", "nope", "2"]));
        let names: Vec<_> = chips.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["SEK", "EUR"]);
    }

    #[test]
    fn items_are_checked_by_membership() {
        let items = selectable_items(&Catalog::fixture(), &SelectionSet::from(vec!["2", "5"]));
        let checked: Vec<_> = items
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(c, _)| c.id.as_str())
            .collect();
        assert_eq!(items.len(), 9);
        assert_eq!(checked, ["2", "5"]);
    }
    mod mounted {
        use super::*;
        use dioxus_core::AttributeValue;
        use dioxus_core::ElementId;
        use dioxus_core::Event;
        use dioxus_core::Mutation;
        use dioxus_core::Mutations;
        use dioxus_html::PlatformEventData;
        use dioxus_html::SerializedHtmlEventConverter;
        use dioxus_html::SerializedMouseData;
        use std::any::Any;
        use std::cell::RefCell;
        use std::collections::HashMap;
        use std::rc::Rc;

        #[derive(Debug, Clone, PartialEq)]
        enum Call {
            Changed(Vec<String>),
            Selected(String),
            Deselected(String),
        }

        type Log = Rc<RefCell<Vec<Call>>>;

        fn names(currencies: Vec<CurrencyEntity>) -> Vec<String> {
            currencies.into_iter().map(|c| c.name).collect()
        }

        fn recording(log: Log) -> Element {
            recording_with(log, DiffPolicy::default())
        }

        fn recording_length(log: Log) -> Element {
            recording_with(log, DiffPolicy::LengthHeuristic)
        }

        fn recording_with(log: Log, diff_policy: DiffPolicy) -> Element {
            let on_change_log = log.clone();
            let on_select_log = log.clone();
            let on_deselect_log = log;
            rsx! {
                CurrencySelector {
                    currencies: Catalog::fixture(),
                    diff_policy,
                    on_change: move |c: Vec<CurrencyEntity>| on_change_log.borrow_mut().push(Call::Changed(names(c))),
                    on_select: move |c: CurrencyEntity| on_select_log.borrow_mut().push(Call::Selected(c.name)),
                    on_deselect: move |c: CurrencyEntity| on_deselect_log.borrow_mut().push(Call::Deselected(c.name)),
                }
            }
        }

        fn silent() -> Element {
            rsx! {
                CurrencySelector { currencies: Catalog::fixture() }
            }
        }

        /// A mounted dom plus the element ids of everything carrying an
        /// `id` or `data-testid`, refreshed after every render.
        struct Mounted {
            dom: VirtualDom,
            elements: HashMap<String, ElementId>,
        }

        impl Mounted {
            fn new(mut dom: VirtualDom) -> Self {
                dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
                let edits = dom.rebuild_to_vec();
                let mut mounted = Self {
                    dom,
                    elements: HashMap::new(),
                };
                mounted.track(edits);
                mounted
            }

            fn track(&mut self, mutations: Mutations) {
                for edit in mutations.edits {
                    if let Mutation::SetAttribute {
                        name: "id" | "data-testid",
                        value: AttributeValue::Text(value),
                        id,
                        ..
                    } = edit
                    {
                        self.elements.insert(value, id);
                    }
                }
            }

            fn click(&mut self, key: &str) {
                let element = *self
                    .elements
                    .get(key)
                    .unwrap_or_else(|| panic!("no element `{key}` mounted"));
                let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
                self.dom
                    .runtime()
                    .handle_event("click", Event::new(Rc::new(data) as Rc<dyn Any>, true), element);
                let edits = self.dom.render_immediate_to_vec();
                self.track(edits);
            }
        }

        fn mount_recording() -> (Mounted, Log) {
            let log = Log::default();
            let dom = VirtualDom::new_with_props(recording, log.clone());
            (Mounted::new(dom), log)
        }

        fn usd_changed() -> Call {
            Call::Changed(vec!["USD".to_string()])
        }

        #[test]
        fn checkbox_twice_fires_change_then_select_then_change_then_deselect() {
            let (mut selector, log) = mount_recording();

            selector.click("1");
            assert_eq!(*log.borrow(), vec![usd_changed(), Call::Selected("USD".into())]);

            selector.click("1");
            assert_eq!(
                *log.borrow(),
                vec![
                    usd_changed(),
                    Call::Selected("USD".into()),
                    Call::Changed(vec![]),
                    Call::Deselected("USD".into()),
                ]
            );
        }

        #[test]
        fn chip_close_and_checkbox_log_the_same_calls() {
            let (mut via_chip, chip_log) = mount_recording();
            via_chip.click("1");
            via_chip.click("close-selected-1");

            let (mut via_checkbox, checkbox_log) = mount_recording();
            via_checkbox.click("1");
            via_checkbox.click("1");

            assert_eq!(*chip_log.borrow(), *checkbox_log.borrow());
            assert_eq!(chip_log.borrow().last(), Some(&Call::Deselected("USD".into())));
        }

        #[test]
        fn selecting_all_then_closing_chips_never_crosses_notifications() {
            let (mut selector, log) = mount_recording();
            let catalog = Catalog::fixture();

            for currency in &catalog {
                selector.click(&currency.id);
            }
            let all: Vec<String> = catalog.iter().map(|c| c.name.clone()).collect();
            assert_eq!(log.borrow().iter().filter(|c| matches!(c, Call::Selected(_))).count(), 9);
            assert!(!log.borrow().iter().any(|c| matches!(c, Call::Deselected(_))));
            assert_eq!(log.borrow()[log.borrow().len() - 2], Call::Changed(all));

            log.borrow_mut().clear();
            for currency in &catalog {
                selector.click(&format!("close-selected-{}", currency.id));
            }
            assert_eq!(log.borrow().iter().filter(|c| matches!(c, Call::Deselected(_))).count(), 9);
            assert!(!log.borrow().iter().any(|c| matches!(c, Call::Selected(_))));
            assert_eq!(log.borrow()[log.borrow().len() - 2], Call::Changed(vec![]));
        }

        #[test]
        fn length_heuristic_reports_first_unselected_currency() {
            let log = Log::default();
            let mut selector = Mounted::new(VirtualDom::new_with_props(recording_length, log.clone()));

            selector.click("3");

            assert_eq!(
                *log.borrow(),
                vec![Call::Changed(vec!["GBP".to_string()]), Call::Selected("USD".into())]
            );
        }

        #[test]
        fn selector_without_callbacks_handles_clicks() {
            let mut selector = Mounted::new(VirtualDom::new(silent));

            selector.click("1");
            selector.click("2");
            selector.click("close-selected-1");
            selector.click("2");

            assert!(dioxus_ssr::render(&selector.dom).contains(r#"data-testid="currency-selector""#));
            assert!(!dioxus_ssr::render(&selector.dom).contains("selected-currency-"));
        }
    }
}
