//! Converts amounts from a fixed base currency into a selected target
//! currency and renders the single button that triggers it.
//!
//! The conversion core ([`converter::Converter`]) knows nothing about
//! rendering. [`widget::WidgetHandle`] binds it to a host through the
//! traits in [`host`].

pub mod callbacks;
pub mod conversion;
pub mod converter;
pub mod currency_code;
pub mod error;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod host;
pub mod memory_host;
pub mod prefs;
pub mod rate_table;
pub mod state;
pub mod widget;

pub use callbacks::CallbackSlots;
pub use callbacks::Notification;
pub use converter::Converter;
pub use currency_code::CurrencyCode;
pub use error::WidgetError;
pub use fiat_amount::FiatAmount;
pub use fiat_currency::FiatCurrency;
pub use rate_table::RateTable;
pub use state::AmountInput;
pub use state::ConversionState;
pub use state::StateUpdate;
pub use widget::WidgetConfig;
pub use widget::WidgetHandle;
