use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::error::ModelError;

/// Currencies the model can report in. Every formula works in USD and the
/// result is converted at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
pub enum Currency {
    #[serde(rename = "USD")]
    #[default]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// Units of this currency per USD.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| ModelError::UnsupportedCurrency(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    amount / from.rate() * to.rate()
}

/// String-keyed conversion for callers holding raw currency codes.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> Result<f64, ModelError> {
    let from = Currency::from_code(from)?;
    let to = Currency::from_code(to)?;
    Ok(convert(amount, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converting_usd_to_eur_applies_the_static_rate() {
        assert!((convert(1000.0, Currency::Usd, Currency::Eur) - 920.0).abs() < 1e-9);
        assert!((convert(920.0, Currency::Eur, Currency::Usd) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn converting_to_the_same_currency_is_identity() {
        assert_eq!(convert(1234.5, Currency::Usd, Currency::Usd), 1234.5);
        assert_eq!(convert(1234.5, Currency::Eur, Currency::Eur), 1234.5);
    }

    #[test]
    fn a_round_trip_through_eur_returns_the_original_amount() {
        for amount in [0.0, 1.0, 85.0, 4_716_280.29, 1e9] {
            let there = convert(amount, Currency::Usd, Currency::Eur);
            let back = convert(there, Currency::Eur, Currency::Usd);
            assert!(
                (back - amount).abs() <= amount.abs() * 1e-12,
                "round trip of {amount} returned {back}"
            );
        }
    }

    #[test]
    fn convert_currency_rejects_unknown_codes() {
        assert_eq!(
            convert_currency(10.0, "USD", "GBP"),
            Err(ModelError::UnsupportedCurrency("GBP".to_string()))
        );
        assert_eq!(
            convert_currency(10.0, "usd", "EUR"),
            Err(ModelError::UnsupportedCurrency("usd".to_string()))
        );
    }

    #[test]
    fn convert_currency_accepts_known_codes() {
        let value = convert_currency(100.0, "USD", "EUR").unwrap();
        assert!((value - 92.0).abs() < 1e-9);
    }
}
