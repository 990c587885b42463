//! Defines the fiat currencies known to the converter.

use serde::Deserialize;
use serde::Serialize;

/// Represents a fiat currency, containing its code, symbol and display name.
///
/// `INR` is the base currency every rate is quoted against. The remaining
/// variants are conversion targets.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    INR, // Indian Rupee
    #[default]
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    JPY, // Japanese Yen
    AUD, // Australian Dollar
}

/// The currency that input amounts are denominated in.
pub const BASE_CURRENCY: FiatCurrency = FiatCurrency::INR;

impl FiatCurrency {
    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::AUD => "A$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::INR => "Indian Rupee",
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::JPY => "Japanese Yen",
            Self::AUD => "Australian Dollar",
        }
    }

    pub fn format_amount(&self, amt: &str) -> String {
        format!("{} {}", amt, self.code())
    }
}
