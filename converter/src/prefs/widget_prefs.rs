use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::Level;
use serde::Deserialize;
use serde::Serialize;

use crate::currency_code::CurrencyCode;
use crate::state::ConversionState;

/// Start-up preferences for hosts that embed the converter.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct WidgetPrefs {
    /// Currency selected before the user picks one.
    currency: CurrencyCode,

    /// Verbosity of the diagnostic log, e.g. "info".
    log_level: String,
}

impl WidgetPrefs {
    /// Creates a WidgetPrefs instance from environment variables,
    /// with in-code defaults for anything unset or unparsable.
    ///
    /// # Environment Variables
    /// - `CONVERTER_CURRENCY`: three-letter code, e.g. "EUR". defaults to "USD".
    /// - `CONVERTER_LOG_LEVEL`: "trace", "debug", "info", "warn" or "error".
    ///   defaults to "info".
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("CONVERTER_CURRENCY").ok().as_deref(),
            env::var("CONVERTER_LOG_LEVEL").ok().as_deref(),
        )
    }

    fn from_vars(currency: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let currency = currency
            .and_then(|s| CurrencyCode::from_str(s).ok())
            .unwrap_or(defaults.currency);

        let log_level = log_level
            .filter(|s| Level::from_str(s).is_ok())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or(defaults.log_level);

        Self {
            currency,
            log_level,
        }
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    /// The state a converter should start from.
    pub fn initial_state(&self) -> ConversionState {
        ConversionState {
            currency: self.currency.clone(),
            ..ConversionState::default()
        }
    }
}

impl Default for WidgetPrefs {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            log_level: "info".to_string(),
        }
    }
}
