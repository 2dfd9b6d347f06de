use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::error::{PricingError, PricingResult};

/// Number of minor units in one whole currency unit
pub const MINOR_UNITS: u64 = 100;

/// Largest decimal amount accepted from catalog input
const MAX_DECIMAL_AMOUNT: f64 = 1_000_000_000.0;

/// Service tier enumeration
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TierId {
    Static,
    Dynamic,
    Ecommerce,
}

impl TierId {
    /// Every tier, in the order they are shown on the site
    pub const ALL: [TierId; 3] = [TierId::Static, TierId::Dynamic, TierId::Ecommerce];

    /// Parse a tier id, reporting a miss as `UnknownKey`
    pub fn parse(value: &str) -> PricingResult<Self> {
        TierId::from_str(value.trim()).map_err(|_| PricingError::unknown_tier(value))
    }

    /// Human-readable tier name
    pub fn label(&self) -> &'static str {
        match self {
            TierId::Static => "Static",
            TierId::Dynamic => "Dynamic",
            TierId::Ecommerce => "E-commerce",
        }
    }
}

/// Display currency enumeration
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// Parse an ISO 4217 code, reporting a miss as `UnsupportedCurrency`
    pub fn parse(code: &str) -> PricingResult<Self> {
        Currency::from_str(code.trim())
            .map_err(|_| PricingError::UnsupportedCurrency(code.to_string()))
    }
}

/// Commitment discount schedule key
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DiscountKey {
    Yearly,
    TwoYear,
    ThreeYear,
}

/// Non-negative monetary amount with two implied decimals
///
/// Amounts carry no currency; the currency is chosen at display time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money {
    /// Amount in hundredths of a unit (cents for USD)
    pub amount: u64,
}

impl Money {
    pub const ZERO: Money = Money { amount: 0 };

    /// Create Money from hundredths
    pub const fn from_minor(amount: u64) -> Self {
        Self { amount }
    }

    /// Create Money from a whole number of units
    pub const fn from_units(units: u64) -> Self {
        Self {
            amount: units * MINOR_UNITS,
        }
    }

    /// Create Money from a decimal value (e.g., 7.2), rounding to the nearest hundredth.
    ///
    /// Negative, non-finite and absurdly large values are rejected as `InvalidCatalog`.
    pub fn from_decimal(value: f64) -> PricingResult<Self> {
        if !value.is_finite() {
            return Err(PricingError::InvalidCatalog(format!(
                "amount must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(PricingError::InvalidCatalog(format!(
                "amount must be non-negative, got {value}"
            )));
        }
        if value > MAX_DECIMAL_AMOUNT {
            return Err(PricingError::InvalidCatalog(format!(
                "amount {value} exceeds maximum of {MAX_DECIMAL_AMOUNT}"
            )));
        }

        Ok(Self {
            amount: (value * MINOR_UNITS as f64).round() as u64,
        })
    }

    /// Convert to decimal value
    pub fn to_decimal(&self) -> f64 {
        self.amount as f64 / MINOR_UNITS as f64
    }

    /// Whole units part
    pub fn units(&self) -> u64 {
        self.amount / MINOR_UNITS
    }

    /// Hundredths part
    pub fn cents(&self) -> u64 {
        self.amount % MINOR_UNITS
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
