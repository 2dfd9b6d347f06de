//! Currency display formatting.
//!
//! One rule for every currency and every call site: the amount is always
//! rendered with exactly two decimal places, including zero and integral
//! amounts, so the same figure reads identically wherever it appears.

use crate::error::PricingResult;
use crate::models::{Currency, Money};

/// Where the symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1,234.50`
    Prefix,
    /// `1.234,50 €`
    Suffix,
}

/// Display conventions for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Currency {
    pub fn style(&self) -> CurrencyStyle {
        match self {
            Currency::Usd => CurrencyStyle {
                symbol: "$",
                placement: SymbolPlacement::Prefix,
                group_separator: ',',
                decimal_separator: '.',
            },
            Currency::Gbp => CurrencyStyle {
                symbol: "£",
                placement: SymbolPlacement::Prefix,
                group_separator: ',',
                decimal_separator: '.',
            },
            Currency::Eur => CurrencyStyle {
                symbol: "€",
                placement: SymbolPlacement::Suffix,
                group_separator: '.',
                decimal_separator: ',',
            },
        }
    }

    /// Render an amount in this currency
    pub fn format(&self, amount: Money) -> String {
        let style = self.style();
        let number = format!(
            "{}{}{:02}",
            group_digits(amount.units(), style.group_separator),
            style.decimal_separator,
            amount.cents()
        );

        match style.placement {
            SymbolPlacement::Prefix => format!("{}{}", style.symbol, number),
            SymbolPlacement::Suffix => format!("{} {}", number, style.symbol),
        }
    }
}

/// Render an amount for a currency code, failing on codes outside USD, EUR and GBP
pub fn format(amount: Money, currency_code: &str) -> PricingResult<String> {
    Ok(Currency::parse(currency_code)?.format(amount))
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    #[test]
    fn test_format_usd() {
        assert_eq!(format(Money::ZERO, "USD").unwrap(), "$0.00");
        assert_eq!(format(Money::from_units(45), "USD").unwrap(), "$45.00");
        assert_eq!(format(Money::from_minor(720), "usd").unwrap(), "$7.20");
        assert_eq!(
            format(Money::from_minor(123_456_789), "USD").unwrap(),
            "$1,234,567.89"
        );
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format(Money::ZERO, "EUR").unwrap(), "0,00 €");
        assert_eq!(format(Money::from_units(220), "EUR").unwrap(), "220,00 €");
        assert_eq!(format(Money::from_minor(11_016), "EUR").unwrap(), "110,16 €");
        assert_eq!(
            format(Money::from_minor(10_000_005), "EUR").unwrap(),
            "100.000,05 €"
        );
    }

    #[test]
    fn test_format_gbp() {
        assert_eq!(format(Money::from_minor(150), "GBP").unwrap(), "£1.50");
        assert_eq!(format(Money::from_units(1000), "GBP").unwrap(), "£1,000.00");
    }

    #[test]
    fn test_format_unknown_currency() {
        assert_eq!(
            format(Money::from_units(1), "BTC").unwrap_err(),
            PricingError::UnsupportedCurrency("BTC".to_string())
        );
        assert!(matches!(
            format(Money::ZERO, "").unwrap_err(),
            PricingError::UnsupportedCurrency(_)
        ));
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, ','), "0");
        assert_eq!(group_digits(999, ','), "999");
        assert_eq!(group_digits(1000, ','), "1,000");
        assert_eq!(group_digits(100_000, '.'), "100.000");
        assert_eq!(group_digits(1_000_000, ','), "1,000,000");
    }
}
