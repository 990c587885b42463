use converter::prefs::widget_prefs::WidgetPrefs;
use dioxus::prelude::*;

fn main() {
    let prefs = WidgetPrefs::from_env();
    dioxus_logger::init(prefs.log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
