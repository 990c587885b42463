//! Provides the fixed map of exchange rates against the base currency.

use std::collections::HashMap;

use dioxus_logger::tracing;
use strum::IntoEnumIterator;

use crate::currency_code::CurrencyCode;
use crate::error::WidgetError;
use crate::fiat_currency::FiatCurrency;

/// Built-in rates: units of target currency per one unit of the base currency.
const BUILTIN_RATES: [(FiatCurrency, f64); 5] = [
    (FiatCurrency::USD, 0.012),
    (FiatCurrency::EUR, 0.011),
    (FiatCurrency::GBP, 0.0099),
    (FiatCurrency::JPY, 1.68),
    (FiatCurrency::AUD, 0.019),
];

/// An immutable map from target currency to its multiplier against the base currency.
///
/// Every rate is finite and strictly positive. There is no way to change a
/// table once it has been built.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable(HashMap<FiatCurrency, f64>);

impl RateTable {
    /// Builds a table from `(currency, rate)` pairs, rejecting non-positive rates.
    ///
    /// Later pairs replace earlier ones for the same currency.
    pub fn new<I>(rates: I) -> Result<Self, WidgetError>
    where
        I: IntoIterator<Item = (FiatCurrency, f64)>,
    {
        let mut map = HashMap::new();
        for (currency, rate) in rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(WidgetError::NonPositiveRate {
                    currency: currency.code(),
                    rate,
                });
            }
            map.insert(currency, rate);
        }
        Ok(Self(map))
    }

    /// The compiled-in table.
    pub fn builtin() -> Self {
        Self(BUILTIN_RATES.into_iter().collect())
    }

    /// Retrieves the rate for a known currency.
    pub fn get(&self, currency: FiatCurrency) -> Option<f64> {
        self.0.get(&currency).copied()
    }

    /// Retrieves the rate for a currency code as held in the converter state.
    ///
    /// Codes that are unknown or absent from the table yield `None` and a
    /// diagnostic.
    pub fn lookup(&self, code: &CurrencyCode) -> Option<(FiatCurrency, f64)> {
        let found = code
            .fiat()
            .and_then(|currency| self.get(currency).map(|rate| (currency, rate)));
        if found.is_none() {
            tracing::error!("{}", WidgetError::UnknownCurrency(code.to_string()));
        }
        found
    }

    /// The currencies with a rate, in declaration order.
    pub fn currencies(&self) -> Vec<FiatCurrency> {
        FiatCurrency::iter()
            .filter(|currency| self.0.contains_key(currency))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the `(currency, rate)` pairs in the table.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// An iterator over the entries of a `RateTable`.
///
/// This struct is created by the `iter` method on `RateTable`.
pub struct Iter<'a>(std::collections::hash_map::Iter<'a, FiatCurrency, f64>);

impl Iterator for Iter<'_> {
    type Item = (FiatCurrency, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(currency, &rate)| (*currency, rate))
    }
}

impl<'a> IntoIterator for &'a RateTable {
    type Item = (FiatCurrency, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
