use thiserror::Error;

/// Message passed to `on_error` when the amount cannot be converted.
pub const ENTER_AMOUNT: &str = "Enter Amount";

/// Everything that can go wrong while mounting or driving a converter widget.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// No element with the given id exists in the host document.
    #[error("Container with ID \"{0}\" not found.")]
    ContainerNotFound(String),

    /// The amount is missing, zero, or not a number.
    #[error("{}", ENTER_AMOUNT)]
    InvalidAmount,

    /// The converted value does not fit in the hundredths counter.
    #[error("Amount too large")]
    AmountOutOfRange,

    /// The currency code is well formed but has no entry in the rate table.
    #[error("No exchange rate found for currency \"{0}\".")]
    UnknownCurrency(String),

    /// The currency code is not three ASCII letters.
    #[error("invalid currency code \"{0}\"")]
    InvalidCurrencyCode(String),

    /// Rate tables only hold finite, strictly positive multipliers.
    #[error("rate for {currency} must be positive, got {rate}")]
    NonPositiveRate { currency: &'static str, rate: f64 },

    /// A state update payload could not be decoded.
    #[error("malformed state update: {0}")]
    MalformedUpdate(String),

    /// The host refused to create or attach the control.
    #[error("render failed: {0}")]
    Render(String),
}
