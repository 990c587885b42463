//! The mutable data bag behind a converter, and the typed updates merged into it.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::currency_code::CurrencyCode;
use crate::error::WidgetError;
use crate::fiat_currency::FiatCurrency;

/// The amount exactly as the caller supplied it.
///
/// Nothing is checked when an amount is stored. Whether it can be converted
/// is decided by [`AmountInput::value`] at conversion time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// The numeric value, if the input is a finite, non-zero number.
    ///
    /// Text is trimmed and parsed as a decimal number, so `" 12.5 "` counts
    /// while `"abc"` does not. Text is held to the same rule as numbers:
    /// `"0"` and whitespace-only text are rejected, where loose browser-style
    /// coercion would read both as zero and convert them to `0.00`.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Missing => return None,
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (value.is_finite() && value != 0.0).then_some(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The amount to convert and the currency to convert it into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionState {
    pub amount: AmountInput,
    pub currency: CurrencyCode,
}

impl Default for ConversionState {
    fn default() -> Self {
        Self {
            amount: AmountInput::Number(0.0),
            currency: FiatCurrency::default().into(),
        }
    }
}

impl ConversionState {
    /// Merges the supplied fields; fields left as `None` keep their value.
    ///
    /// Returns `true` when the update carried a currency.
    pub fn merge(&mut self, update: StateUpdate) -> bool {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        match update.currency {
            Some(currency) => {
                self.currency = currency;
                true
            }
            None => false,
        }
    }
}

/// A present `amount` key always counts as supplied; `null` becomes
/// [`AmountInput::Missing`] instead of "leave unchanged".
fn supplied_amount<'de, D>(deserializer: D) -> Result<Option<AmountInput>, D::Error>
where
    D: Deserializer<'de>,
{
    AmountInput::deserialize(deserializer).map(Some)
}

/// A partial update to a [`ConversionState`].
///
/// `amount: None` keeps the current amount. An explicit JSON `null` amount
/// replaces it with [`AmountInput::Missing`], which fails validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateUpdate {
    #[serde(default, deserialize_with = "supplied_amount")]
    pub amount: Option<AmountInput>,
    #[serde(default, alias = "currencyCode")]
    pub currency: Option<CurrencyCode>,
}

impl StateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: impl Into<AmountInput>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<CurrencyCode>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Marks the amount as supplied even when no usable value came with it.
    ///
    /// For callers whose source drops unset values before they reach the
    /// decoder, e.g. an object key holding `undefined`.
    pub fn mark_amount_supplied(mut self) -> Self {
        self.amount.get_or_insert(AmountInput::Missing);
        self
    }

    /// Sets the currency from a raw code, validating its shape.
    pub fn currency_code(mut self, code: &str) -> Result<Self, WidgetError> {
        self.currency = Some(code.parse()?);
        Ok(self)
    }

    /// Decodes an update from a JSON object such as `{"amount": 100, "currency": "EUR"}`.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        serde_json::from_str(json).map_err(|e| WidgetError::MalformedUpdate(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.currency.is_none()
    }
}
