//! The UI-free heart of the widget: state, rates and the notifications they produce.

use dioxus_logger::tracing;

use crate::callbacks::Notification;
use crate::conversion::convert_amount;
use crate::conversion::validate_amount;
use crate::rate_table::RateTable;
use crate::state::ConversionState;
use crate::state::StateUpdate;

/// Converts base-currency amounts and describes every outcome as a list of
/// [`Notification`]s.
///
/// The converter never calls back into caller code itself. Whoever owns it
/// delivers the returned notifications once it is done mutating, so a
/// callback is free to read or update the converter again. Nothing here
/// touches a rendered control; see [`crate::widget`] for that.
#[derive(Debug, Default)]
pub struct Converter {
    state: ConversionState,
    rates: RateTable,
}

impl Converter {
    pub fn new(rates: RateTable) -> Self {
        Self {
            state: ConversionState::default(),
            rates,
        }
    }

    pub fn with_state(mut self, state: ConversionState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Label for the control that triggers a conversion.
    pub fn button_label(&self) -> String {
        format!("Convert to {}", self.state.currency)
    }

    /// The rate of the selected currency, if the table has one.
    pub fn current_rate(&self) -> Option<f64> {
        self.rates.lookup(&self.state.currency).map(|(_, rate)| rate)
    }

    /// Merges `update` into the state.
    ///
    /// When the update carries a currency, the new rate is reported and a
    /// conversion is attempted with whatever amount is current.
    pub fn update_state(&mut self, update: StateUpdate) -> Vec<Notification> {
        tracing::debug!("update state: {:?}", update);
        if !self.state.merge(update) {
            return Vec::new();
        }
        let mut notes = self.notify_rate_change();
        notes.extend(self.convert());
        notes
    }

    /// Reports the rate of the selected currency.
    pub fn notify_rate_change(&self) -> Vec<Notification> {
        self.current_rate()
            .map(Notification::RateChange)
            .into_iter()
            .collect()
    }

    /// Converts the current amount into the selected currency.
    ///
    /// An invalid or out-of-range amount is reported as an error. An unknown
    /// currency is only logged: no notification is produced at all.
    /// Otherwise any previous error is cleared and the result reported.
    pub fn convert(&self) -> Vec<Notification> {
        tracing::debug!("handle convert");
        let amount = match validate_amount(&self.state.amount) {
            Ok(amount) => amount,
            Err(e) => return vec![Notification::Error(e.to_string())],
        };

        let Some((currency, rate)) = self.rates.lookup(&self.state.currency) else {
            return Vec::new();
        };

        let converted = match convert_amount(amount, rate, currency) {
            Ok(converted) => converted,
            Err(e) => {
                tracing::warn!("cannot convert {} at rate {}: {}", amount, rate, e);
                return vec![Notification::Error(e.to_string())];
            }
        };
        tracing::info!("converted {} to {}", amount, converted.to_string_with_code());

        vec![
            Notification::Error(String::new()),
            Notification::Conversion(converted.to_string()),
        ]
    }
}
