use converter::host::ButtonStyle;
use dioxus::prelude::*;

/// The single button that triggers a conversion.
#[component]
pub fn ConverterButton(label: String, on_activate: EventHandler<MouseEvent>) -> Element {
    let css = ButtonStyle::DEFAULT.to_css();

    rsx! {
        button {
            r#type: "button",
            style: "{css}",
            onclick: move |evt| on_activate.call(evt),
            "{label}"
        }
    }
}
