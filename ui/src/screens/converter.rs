//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use converter::fiat_currency::BASE_CURRENCY;
use converter::prefs::widget_prefs::WidgetPrefs;
use converter::StateUpdate;
use dioxus::prelude::*;

use crate::components::amount_field::AmountField;
use crate::components::converter_button::ConverterButton;
use crate::components::currency_chooser::CurrencyChooser;
use crate::components::currency_chooser::CurrencyInfo;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::hooks::use_converter::use_converter;

#[component]
pub fn ConverterScreen(prefs: WidgetPrefs) -> Element {
    let converter = use_converter(prefs.initial_state());
    let mut amount_text = use_signal(String::new);

    let currencies = converter
        .rates()
        .currencies()
        .into_iter()
        .map(CurrencyInfo::from)
        .collect::<Vec<_>>();

    let state = converter.state.read().clone();
    let selected = state.currency.to_string();
    let label = converter.label();

    let rate_line = match *converter.rate.read() {
        Some(rate) => format!("1 {} = {} {}", BASE_CURRENCY.code(), rate, selected),
        None => format!("No exchange rate for {}", selected),
    };
    let error = converter.error.read().clone();
    let conversion = converter.conversion.read().clone();

    let base_name = BASE_CURRENCY.name();
    let mut on_amount = converter.clone();
    let mut on_currency = converter.clone();
    let mut on_click = converter.clone();

    rsx! {
        Card {
            h3 { "Convert from {base_name}" }
            p {
                style: "color: var(--pico-muted-color);",
                "{rate_line}"
            }
            Grid {
                AmountField {
                    value: amount_text(),
                    placeholder: format!("Amount in {}", BASE_CURRENCY.code()),
                    max_integers: 12,
                    max_decimals: 2,
                    on_input: move |value: String| {
                        amount_text.set(value.clone());
                        on_amount.update(StateUpdate::new().amount(value));
                    },
                }
                CurrencyChooser {
                    selected: selected.clone(),
                    currencies,
                    on_select: move |currency| on_currency.update(StateUpdate::new().currency(currency)),
                }
            }
            ConverterButton {
                label,
                on_activate: move |_| on_click.convert(),
            }
            if !error.is_empty() {
                p {
                    style: "color: var(--pico-del-color); margin-top: 1rem;",
                    "{error}"
                }
            }
            if let Some(value) = conversion {
                p {
                    style: "margin-top: 1rem;",
                    strong { "{value} {selected}" }
                }
            }
        }
    }
}
