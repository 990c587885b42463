use converter::prefs::widget_prefs::WidgetPrefs;
use dioxus::prelude::*;

fn main() {

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let prefs = WidgetPrefs::from_env();
    dioxus_logger::init(prefs.log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
