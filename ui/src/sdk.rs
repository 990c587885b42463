//! JavaScript entry point for embedding the converter in a plain page.
//!
//! ```js
//! const sdk = new CurrencyConverterSdk();
//! sdk.init("converter", value => ..., rate => ..., message => ...);
//! sdk.updateData({ amount: 100, currency: "EUR" });
//! ```

use converter::CallbackSlots;
use converter::StateUpdate;
use converter::WidgetConfig;
use converter::WidgetHandle;
use dioxus_logger::tracing;
use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::dom_host::DomControl;
use crate::dom_host::DomDocument;

fn call_js(f: &Function, arg: &JsValue) {
    if let Err(e) = f.call1(&JsValue::NULL, arg) {
        tracing::warn!("converter callback threw: {:?}", e);
    }
}

/// One converter widget, owned by the page that constructed it.
#[wasm_bindgen]
pub struct CurrencyConverterSdk {
    widget: WidgetHandle<DomControl>,
}

#[wasm_bindgen]
impl CurrencyConverterSdk {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            widget: WidgetHandle::new(),
        }
    }

    /// Renders the button into the element with id `container_id`.
    ///
    /// A missing element is only logged to the console.
    pub fn init(
        &self,
        container_id: &str,
        on_conversion: Option<Function>,
        on_rate_change: Option<Function>,
        on_error: Option<Function>,
    ) {
        let Some(document) = DomDocument::from_window() else {
            tracing::error!("no browser document available");
            return;
        };

        let mut callbacks = CallbackSlots::new();
        if let Some(f) = on_conversion {
            callbacks = callbacks.on_conversion(move |value| call_js(&f, &JsValue::from_str(value)));
        }
        if let Some(f) = on_rate_change {
            callbacks = callbacks.on_rate_change(move |rate| call_js(&f, &JsValue::from_f64(rate)));
        }
        if let Some(f) = on_error {
            callbacks = callbacks.on_error(move |message| call_js(&f, &JsValue::from_str(message)));
        }

        let config = WidgetConfig::new(container_id).callbacks(callbacks);
        if let Err(e) = self.widget.initialize(config, &document) {
            tracing::debug!("converter not mounted: {}", e);
        }
    }

    /// Merges `{ amount?, currency? }` into the widget state.
    ///
    /// An `amount` key that is present but holds `NaN`, `null` or
    /// `undefined` clears the amount, so the next conversion reports an error.
    #[wasm_bindgen(js_name = updateData)]
    pub fn update_data(&self, data: &JsValue) -> Result<(), JsValue> {
        let json: String = js_sys::JSON::stringify(data)?.into();
        let mut update =
            StateUpdate::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        // stringify drops `undefined` keys entirely
        if js_sys::Reflect::has(data, &JsValue::from_str("amount")).unwrap_or(false) {
            update = update.mark_amount_supplied();
        }
        self.widget.update_state(update);
        Ok(())
    }

    /// Converts the current amount, as a click on the button would.
    pub fn convert(&self) {
        self.widget.convert();
    }
}

impl Default for CurrencyConverterSdk {
    fn default() -> Self {
        Self::new()
    }
}
