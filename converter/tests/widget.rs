use std::cell::RefCell;
use std::rc::Rc;

use converter::host::ButtonStyle;
use converter::memory_host::MemoryControl;
use converter::memory_host::MemoryDocument;
use converter::AmountInput;
use converter::CallbackSlots;
use converter::FiatCurrency;
use converter::RateTable;
use converter::StateUpdate;
use converter::WidgetConfig;
use converter::WidgetError;
use converter::WidgetHandle;

#[derive(Default)]
struct Recorded {
    conversions: Vec<String>,
    rates: Vec<f64>,
    errors: Vec<String>,
}

fn recording_config(container_id: &str) -> (WidgetConfig, Rc<RefCell<Recorded>>) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let (c, r, e) = (recorded.clone(), recorded.clone(), recorded.clone());
    let callbacks = CallbackSlots::new()
        .on_conversion(move |v| c.borrow_mut().conversions.push(v.to_string()))
        .on_rate_change(move |rate| r.borrow_mut().rates.push(rate))
        .on_error(move |m| e.borrow_mut().errors.push(m.to_string()));
    (WidgetConfig::new(container_id).callbacks(callbacks), recorded)
}

fn mounted() -> (WidgetHandle<MemoryControl>, MemoryDocument, Rc<RefCell<Recorded>>) {
    let document = MemoryDocument::new().with_container("converter");
    let widget = WidgetHandle::new();
    let (config, recorded) = recording_config("converter");
    widget.initialize(config, &document).unwrap();
    (widget, document, recorded)
}

fn button(document: &MemoryDocument) -> MemoryControl {
    let buttons = document.buttons("converter");
    assert_eq!(buttons.len(), 1);
    buttons[0].clone()
}

#[test]
fn initialize_renders_one_styled_button_and_reports_usd_rate() {
    let document = MemoryDocument::new();
    let container = document.add_container("converter");
    container.push_placeholder("previous content");

    let widget = WidgetHandle::new();
    let (config, recorded) = recording_config("converter");
    widget.initialize(config, &document).unwrap();

    let button = button(&document);
    assert_eq!(button.label(), "Convert to USD");
    assert_eq!(button.style(), ButtonStyle::DEFAULT);
    assert!(widget.is_mounted());

    let recorded = recorded.borrow();
    assert_eq!(recorded.rates, vec![0.012]);
    assert!(recorded.conversions.is_empty());
    assert!(recorded.errors.is_empty());
}

#[test]
fn missing_container_is_not_reported_through_on_error() {
    let document = MemoryDocument::new().with_container("elsewhere");
    let widget = WidgetHandle::<MemoryControl>::new();
    let (config, recorded) = recording_config("converter");

    let result = widget.initialize(config, &document);

    assert_eq!(result, Err(WidgetError::ContainerNotFound("converter".into())));
    assert!(!widget.is_mounted());
    assert!(document.buttons("elsewhere").is_empty());
    let recorded = recorded.borrow();
    assert!(recorded.rates.is_empty());
    assert!(recorded.errors.is_empty());
}

#[test]
fn callbacks_survive_a_failed_mount() {
    let document = MemoryDocument::new();
    let widget = WidgetHandle::<MemoryControl>::new();
    let (config, recorded) = recording_config("converter");
    assert!(widget.initialize(config, &document).is_err());

    widget.update_state(StateUpdate::new().amount(100.0).currency(FiatCurrency::USD));

    let recorded = recorded.borrow();
    assert_eq!(recorded.rates, vec![0.012]);
    assert_eq!(recorded.conversions, vec!["1.20"]);
}

#[test]
fn click_converts_hundred_rupees_to_dollars() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(100.0));
    button(&document).click();

    let recorded = recorded.borrow();
    assert_eq!(recorded.conversions, vec!["1.20"]);
    assert_eq!(recorded.errors, vec![""]);
}

#[test]
fn every_supported_currency_rounds_to_two_decimals() {
    let rates = RateTable::builtin();
    for currency in rates.currencies() {
        let (widget, _, recorded) = mounted();
        let rate = rates.get(currency).unwrap();

        widget.update_state(StateUpdate::new().amount(1234.5).currency(currency));

        let expected = format!("{:.2}", (1234.5 * rate * 100.0).round() / 100.0);
        assert_eq!(recorded.borrow().conversions, vec![expected]);
        assert_eq!(recorded.borrow().rates.last(), Some(&rate));
    }
}

#[test]
fn zero_amount_reports_enter_amount() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(0.0));
    button(&document).click();

    let recorded = recorded.borrow();
    assert_eq!(recorded.errors, vec!["Enter Amount"]);
    assert!(recorded.conversions.is_empty());
}

#[test]
fn text_amount_behaves_like_zero() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount("abc"));
    button(&document).click();

    let recorded = recorded.borrow();
    assert_eq!(recorded.errors, vec!["Enter Amount"]);
    assert!(recorded.conversions.is_empty());
}

#[test]
fn numeric_text_amount_is_converted() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(AmountInput::from("250")));
    button(&document).click();

    assert_eq!(recorded.borrow().conversions, vec!["3.00"]);
}

#[test]
fn currency_change_relabels_reports_rate_and_reconverts() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(100.0));
    widget.update_state(StateUpdate::new().currency(FiatCurrency::EUR));

    assert_eq!(button(&document).label(), "Convert to EUR");
    let recorded = recorded.borrow();
    assert_eq!(recorded.rates, vec![0.012, 0.011]);
    assert_eq!(recorded.conversions, vec!["1.10"]);
    assert_eq!(recorded.errors, vec![""]);
}

#[test]
fn error_is_cleared_after_a_successful_conversion() {
    let (widget, document, recorded) = mounted();
    button(&document).click();
    widget.update_state(StateUpdate::new().amount(10.0));
    button(&document).click();

    let recorded = recorded.borrow();
    assert_eq!(recorded.errors, vec!["Enter Amount", ""]);
    assert_eq!(recorded.conversions, vec!["0.12"]);
}

#[test]
fn unsupported_currency_is_silent() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(100.0));
    widget.update_state(StateUpdate::from_json(r#"{"currency": "ZZZ"}"#).unwrap());
    button(&document).click();

    assert_eq!(button(&document).label(), "Convert to ZZZ");
    let recorded = recorded.borrow();
    assert_eq!(recorded.rates, vec![0.012]);
    assert!(recorded.conversions.is_empty());
    assert!(recorded.errors.is_empty());
}

#[test]
fn clicks_after_the_widget_is_dropped_are_ignored() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(100.0));
    let button = button(&document);
    drop(widget);

    button.click();
    assert!(recorded.borrow().conversions.is_empty());
}

#[test]
fn instances_are_independent() {
    let document = MemoryDocument::new().with_container("a").with_container("b");
    let first = WidgetHandle::<MemoryControl>::new();
    let second = WidgetHandle::<MemoryControl>::new();
    first.initialize(WidgetConfig::new("a"), &document).unwrap();
    second.initialize(WidgetConfig::new("b"), &document).unwrap();

    first.update_state(StateUpdate::new().currency(FiatCurrency::GBP));

    assert_eq!(document.buttons("a")[0].label(), "Convert to GBP");
    assert_eq!(document.buttons("b")[0].label(), "Convert to USD");
    assert_eq!(second.state().currency.as_str(), "USD");
}

#[test]
fn null_amount_clears_the_previous_amount() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(100.0));
    widget.update_state(StateUpdate::from_json(r#"{"amount": null}"#).unwrap());
    button(&document).click();

    assert_eq!(widget.state().amount, AmountInput::Missing);
    let recorded = recorded.borrow();
    assert_eq!(recorded.errors, vec!["Enter Amount"]);
    assert!(recorded.conversions.is_empty());
}

#[test]
fn callbacks_may_read_the_widget_while_it_reports() {
    let document = MemoryDocument::new().with_container("converter");
    let widget = WidgetHandle::<MemoryControl>::new();
    let labels = Rc::new(RefCell::new(Vec::new()));

    let (reader, seen) = (widget.clone(), labels.clone());
    let callbacks = CallbackSlots::new().on_rate_change(move |_| {
        seen.borrow_mut().push(reader.button_label());
        assert!(reader.is_mounted());
    });
    widget
        .initialize(WidgetConfig::new("converter").callbacks(callbacks), &document)
        .unwrap();
    widget.update_state(StateUpdate::new().currency(FiatCurrency::GBP));

    assert_eq!(*labels.borrow(), vec!["Convert to USD", "Convert to GBP"]);
}

#[test]
fn updates_made_from_a_callback_are_applied() {
    let document = MemoryDocument::new().with_container("converter");
    let widget = WidgetHandle::<MemoryControl>::new();
    let conversions = Rc::new(RefCell::new(Vec::new()));

    let (writer, seen) = (widget.clone(), conversions.clone());
    let callbacks = CallbackSlots::new()
        .on_error(move |message| {
            if !message.is_empty() {
                writer.update_state(StateUpdate::new().amount(100.0).currency(FiatCurrency::EUR));
            }
        })
        .on_conversion(move |value| seen.borrow_mut().push(value.to_string()));
    widget
        .initialize(WidgetConfig::new("converter").callbacks(callbacks), &document)
        .unwrap();

    button(&document).click();

    assert_eq!(widget.state().amount, AmountInput::Number(100.0));
    assert_eq!(button(&document).label(), "Convert to EUR");
    assert_eq!(*conversions.borrow(), vec!["1.10"]);
}

#[test]
fn amount_too_large_to_render_reports_an_error() {
    let (widget, document, recorded) = mounted();
    widget.update_state(StateUpdate::new().amount(1e20));
    button(&document).click();

    let recorded = recorded.borrow();
    assert_eq!(recorded.errors, vec!["Amount too large"]);
    assert!(recorded.conversions.is_empty());
}
