use api::prefs::SelectorPrefs;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

fn main() {
    let prefs = SelectorPrefs::from_env();
    dioxus_logger::init(prefs.log_level).expect("failed to init logger");
    info!("catalog: {:?}, diff policy: {}", prefs.catalog_source, prefs.diff_policy.name());
    dioxus::LaunchBuilder::new().with_context(prefs).launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
