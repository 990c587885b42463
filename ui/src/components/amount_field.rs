// ui/src/components/amount_field.rs
use dioxus::prelude::*;

/// Keeps only digits and the first decimal point, capping both parts.
pub fn sanitize_amount(raw: &str, max_integers: u8, max_decimals: u8) -> String {
    let mut sanitized = String::new();
    let mut has_decimal = false;
    let mut integer_digits = 0;
    let mut decimal_digits = 0;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            if has_decimal {
                if decimal_digits < max_decimals {
                    sanitized.push(ch);
                    decimal_digits += 1;
                }
            } else if integer_digits < max_integers {
                sanitized.push(ch);
                integer_digits += 1;
            }
        } else if ch == '.' && !has_decimal {
            sanitized.push(ch);
            has_decimal = true;
        }
    }
    sanitized
}

/// A text field for the base-currency amount.
///
/// Whatever the user types is sanitized before `on_input` sees it.
#[component]
pub fn AmountField(
    value: String,
    on_input: EventHandler<String>,
    max_integers: u8,
    max_decimals: u8,
    placeholder: String,
) -> Element {
    let focus_css = r#"
        input.hide-placeholder-focus:focus::placeholder {
            color: transparent;
            opacity: 0;
        }
    "#;

    rsx! {
        style { "{focus_css}" }
        input {
            r#type: "text",
            class: "pico-input hide-placeholder-focus",
            style: "margin-bottom: 0; width: 100%;",
            inputmode: "decimal",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| on_input.call(sanitize_amount(&event.value(), max_integers, max_decimals)),
        }
    }
}
