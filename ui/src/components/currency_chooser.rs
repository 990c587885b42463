// ui/src/components/currency_chooser.rs
#![allow(non_snake_case)]

use converter::FiatCurrency;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone, Copy)]
pub struct CurrencyInfo {
    pub currency: FiatCurrency,
    pub short_name: &'static str,
    pub long_name: &'static str,
}

impl From<FiatCurrency> for CurrencyInfo {
    fn from(currency: FiatCurrency) -> Self {
        Self {
            currency,
            short_name: currency.code(),
            long_name: currency.name(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyChooserProps {
    /// Code of the currently selected target currency. May be one that is not listed.
    pub selected: String,
    /// The currencies the user can pick from.
    pub currencies: Vec<CurrencyInfo>,
    pub on_select: EventHandler<FiatCurrency>,
    #[props(optional)]
    pub style: Option<String>,
}

/// A dropdown with a search box for picking the target currency.
pub fn CurrencyChooser(props: CurrencyChooserProps) -> Element {
    let mut is_open = use_signal(|| false);
    let mut filter_text = use_signal(|| "".to_string());

    let selected_long_name = props
        .currencies
        .iter()
        .find(|c| c.short_name == props.selected)
        .map(|c| c.long_name)
        .unwrap_or("unsupported currency");

    let tooltip = format!("Converting to {}. Click to choose another currency.", selected_long_name);

    let filtered = props
        .currencies
        .iter()
        .filter(|c| {
            let filter_lower = filter_text.read().to_lowercase();
            c.long_name.to_lowercase().contains(&filter_lower)
                || c.short_name.to_lowercase().contains(&filter_lower)
        })
        .copied()
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "{props.style.as_deref().unwrap_or(\"\")}",
            div {
                style: "position: relative; width: 6rem;",
                div {
                    class: "secondary",
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.375rem 0.5rem;
                        line-height: 1.2;
                        cursor: pointer;
                        border: 1px solid var(--pico-secondary-border);
                        border-radius: var(--pico-border-radius);
                        ",
                    title: "{tooltip}",
                    onclick: move |_| is_open.toggle(),
                    span { "{props.selected}" }
                    span { "↓" }
                }
                if is_open() {
                    // Backdrop to catch clicks outside the dropdown
                    div {
                        style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                        onclick: move |_| is_open.set(false),
                    }
                    div {
                        // Stop click propagation to prevent the backdrop from closing the dropdown
                        onclick: |e| e.stop_propagation(),
                        style: "
                            position: absolute;
                            min-width: 16rem;
                            z-index: 10;
                            background-color: var(--pico-card-background-color);
                            border: 1px solid var(--pico-card-border-color);
                            border-radius: var(--pico-border-radius);
                            padding: 0.5rem;
                            margin-top: 0.25rem;
                        ",
                        input {
                            r#type: "text",
                            placeholder: "Search currencies...",
                            value: "{filter_text}",
                            oninput: move |evt| filter_text.set(evt.value()),
                            style: "margin-bottom: 0.5rem; width: 100%;",
                            onmounted: move |mounted| {
                                spawn(async move {
                                    mounted.data.set_focus(true).await.ok();
                                });
                            },
                        }
                        ul {
                            role: "listbox",
                            style: "list-style: none; margin: 0; padding: 0; max-height: 250px; overflow-y: auto;",
                            for info in filtered {
                                li {
                                    key: "{info.short_name}",
                                    style: "display: flex; align-items: center; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                                    onclick: move |_| {
                                        props.on_select.call(info.currency);
                                        filter_text.set(String::new());
                                        is_open.set(false);
                                    },
                                    span {
                                        style: if info.short_name == props.selected { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" },
                                        "✓"
                                    }
                                    span { "{info.short_name} - {info.long_name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
