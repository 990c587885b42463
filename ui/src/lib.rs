// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
#[cfg(feature = "web")]
pub mod dom_host;
pub mod hooks;
mod screens;
#[cfg(feature = "web")]
pub mod sdk;

use components::pico::Container;
use converter::prefs::widget_prefs::WidgetPrefs;
use screens::converter::ConverterScreen;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        background-color: var(--pico-background-color);
    }

    .app-main-container {
        display: flex;
        justify-content: center;
        padding: 2rem 1rem;
    }

    .app-main-container article {
        width: 100%;
        max-width: 32rem;
    }
"#;

    let prefs = use_hook(WidgetPrefs::from_env);
    use_hook(|| dioxus_logger::tracing::info!("prefs: {:#?}", prefs));

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{css}"
        }
        Container {
            div {
                class: "app-main-container",
                ConverterScreen { prefs }
            }
        }
    }
}
