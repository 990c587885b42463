//! Pure conversion math, independent of any widget or host.

use crate::error::WidgetError;
use crate::fiat_amount::FiatAmount;
use crate::fiat_currency::FiatCurrency;
use crate::state::AmountInput;

/// Accepts an amount only if it is a finite, non-zero number.
pub fn validate_amount(amount: &AmountInput) -> Result<f64, WidgetError> {
    amount.value().ok_or(WidgetError::InvalidAmount)
}

/// Multiplies a base-currency amount by a rate and rounds to two decimals.
///
/// Fails with [`WidgetError::AmountOutOfRange`] when the result is too large
/// to hold exactly.
pub fn convert_amount(
    amount: f64,
    rate: f64,
    currency: FiatCurrency,
) -> Result<FiatAmount, WidgetError> {
    FiatAmount::try_from_float(amount * rate, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_table::RateTable;

    #[test]
    fn hundred_rupees_in_dollars() {
        assert_eq!(convert_amount(100.0, 0.012, FiatCurrency::USD).unwrap().to_string(), "1.20");
    }

    #[test]
    fn every_builtin_rate_rounds_to_two_decimals() {
        let table = RateTable::builtin();
        for amount in [1.0, 37.5, 100.0, 12345.67] {
            for (currency, rate) in &table {
                let expected = format!("{:.2}", (amount * rate * 100.0).round() / 100.0);
                assert_eq!(convert_amount(amount, rate, currency).unwrap().to_string(), expected);
            }
        }
    }

    #[test]
    fn out_of_range_result_is_an_error() {
        assert_eq!(
            convert_amount(1e20, 0.012, FiatCurrency::USD),
            Err(WidgetError::AmountOutOfRange)
        );
        // JPY overflows first since its rate is the largest
        assert!(convert_amount(5.4e16, 1.68, FiatCurrency::JPY).is_ok());
        assert!(convert_amount(5.6e16, 1.68, FiatCurrency::JPY).is_err());
    }

    #[test]
    fn rejects_invalid_amounts() {
        assert_eq!(validate_amount(&AmountInput::Number(0.0)), Err(WidgetError::InvalidAmount));
        assert_eq!(validate_amount(&AmountInput::from("abc")), Err(WidgetError::InvalidAmount));
        assert_eq!(validate_amount(&AmountInput::Missing), Err(WidgetError::InvalidAmount));
        assert_eq!(validate_amount(&AmountInput::from("250")), Ok(250.0));
    }

    #[test]
    fn invalid_amount_message() {
        assert_eq!(WidgetError::InvalidAmount.to_string(), "Enter Amount");
    }
}
