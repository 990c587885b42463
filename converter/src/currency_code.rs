//! A validated, normalized currency code as held by the converter state.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::WidgetError;
use crate::fiat_currency::FiatCurrency;

/// Three ASCII letters, upper case.
///
/// The code may name a currency the rate table does not know about. That is
/// only detected at lookup time, where it is logged rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the known currency this code names, if any.
    pub fn fiat(&self) -> Option<FiatCurrency> {
        FiatCurrency::from_str(&self.0).ok()
    }
}

impl FromStr for CurrencyCode {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WidgetError::InvalidCurrencyCode(s.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = WidgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl From<FiatCurrency> for CurrencyCode {
    fn from(currency: FiatCurrency) -> Self {
        Self(currency.code().to_string())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        FiatCurrency::default().into()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let code: CurrencyCode = " eur ".parse().unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert_eq!(code.fiat(), Some(FiatCurrency::EUR));
    }

    #[test]
    fn well_formed_unknown_code_is_accepted() {
        let code: CurrencyCode = "ZZZ".parse().unwrap();
        assert_eq!(code.fiat(), None);
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "US", "USDT", "U$D", "123"] {
            assert_eq!(
                bad.parse::<CurrencyCode>(),
                Err(WidgetError::InvalidCurrencyCode(bad.to_string()))
            );
        }
    }

    #[test]
    fn default_is_usd() {
        assert_eq!(CurrencyCode::default().to_string(), "USD");
    }
}
