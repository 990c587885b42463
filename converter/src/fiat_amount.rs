//! Provides a safe, self-contained type for representing converted amounts.

use std::fmt;

use crate::error::WidgetError;
use crate::fiat_currency::FiatCurrency;

/// Number of decimal places every converted amount is rounded to.
pub const DECIMALS: u32 = 2;

/// Represents a monetary value in a specific fiat currency.
///
/// Internally, the amount is stored as a signed 64-bit count of hundredths
/// so the rendered value is exactly what was rounded. The default `Display`
/// implementation formats this as a plain two-decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    // --- Getters ---

    /// Returns the currency type of the amount.
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Returns the raw amount in hundredths.
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    // --- Constructors ---

    /// Creates a new `FiatAmount` from a floating-point value.
    ///
    /// The float is rounded to the nearest hundredth, halves away from zero.
    /// Values whose hundredths do not fit in an `i64` are rejected rather
    /// than clamped.
    ///
    /// # Examples
    /// ```
    /// use converter::fiat_amount::FiatAmount;
    /// use converter::fiat_currency::FiatCurrency;
    ///
    /// let amount = FiatAmount::try_from_float(123.456, FiatCurrency::USD).unwrap();
    /// assert_eq!(amount.as_minor_units(), 12346);
    ///
    /// assert!(FiatAmount::try_from_float(1e18, FiatCurrency::USD).is_err());
    /// ```
    pub fn try_from_float(value: f64, currency: FiatCurrency) -> Result<Self, WidgetError> {
        let multiplier = 10_f64.powi(DECIMALS as i32);
        let scaled = (value * multiplier).round();

        // `i64::MAX as f64` is 2^63, one past the largest i64
        if scaled.is_nan() || scaled.abs() >= i64::MAX as f64 {
            return Err(WidgetError::AmountOutOfRange);
        }

        Ok(Self {
            amount: scaled as i64,
            currency,
        })
    }

    /// Creates a new `FiatAmount` directly from hundredths.
    ///
    /// # Example
    /// ```
    /// use converter::fiat_amount::FiatAmount;
    /// use converter::fiat_currency::FiatCurrency;
    ///
    /// let amount = FiatAmount::new_from_minor(12345, FiatCurrency::USD);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn new_from_minor(amount: i64, currency: FiatCurrency) -> Self {
        Self { amount, currency }
    }

    // --- Display Methods ---

    /// Formats the amount with its currency symbol (e.g., "$25.34").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }

    /// Formats the amount with its currency code (e.g., "25.34 USD").
    pub fn to_string_with_code(&self) -> String {
        self.currency.format_amount(&self.to_string())
    }
}

/// Formats the amount as a numeric string with exactly two decimals (e.g., "25.34").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10_u64.pow(DECIMALS);
        let magnitude = self.amount.unsigned_abs();
        let sign = if self.amount < 0 { "-" } else { "" };

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / divisor,
            magnitude % divisor,
            width = DECIMALS as usize
        )
    }
}
