//! Pricing catalog
//!
//! `CatalogFile` is the raw, deserialized shape of a catalog document.
//! `PricingCatalog` is the validated, immutable form every calculation reads
//! from. All invariants (non-negative prices, discounts within 0-100, every
//! tier present, comparison cells pointing at real add-ons) are checked once
//! in `PricingCatalog::try_from` and never again at calculation time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use validator::Validate;

use crate::comparison::{ComparisonCell, ComparisonRowInput};
use crate::error::{PricingError, PricingResult};
use crate::models::{DiscountKey, Money, TierId};

/// Catalog bundled with the crate, matching the prices shown on the site
const STANDARD_CATALOG: &str = include_str!("../data/catalog.json");

/// Basis points in 100%
const FULL_BPS: u32 = 10_000;

/// Float noise allowed when reading a two-decimal percentage as basis points
const BPS_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Raw input
// ============================================================================

/// Catalog document as read from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogFile {
    pub tiers: BTreeMap<TierId, TierPriceInput>,
    pub addons: BTreeMap<String, AddonInput>,
    pub discounts: DiscountInput,
    #[serde(default)]
    pub comparison: Vec<ComparisonRowInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TierPriceInput {
    #[validate(range(min = 0.0))]
    pub setup_price: f64,
    #[validate(range(min = 0.0))]
    pub monthly_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddonInput {
    #[validate(length(min = 1, max = 100))]
    pub label: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// Discount percentages per commitment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiscountInput {
    #[validate(range(min = 0.0, max = 100.0))]
    pub yearly: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub two_year: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub three_year: f64,
}

// ============================================================================
// Validated catalog
// ============================================================================

/// Base prices for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPrice {
    pub setup_price: Money,
    pub monthly_price: Money,
}

/// A priced optional feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Addon {
    pub key: String,
    pub label: String,
    pub price: Money,
}

/// Commitment discounts, stored in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSchedule {
    pub yearly_bps: u32,
    pub two_year_bps: u32,
    pub three_year_bps: u32,
}

impl DiscountSchedule {
    /// Discount for a schedule entry, in basis points (0..=10000)
    pub fn bps(&self, key: DiscountKey) -> u32 {
        match key {
            DiscountKey::Yearly => self.yearly_bps,
            DiscountKey::TwoYear => self.two_year_bps,
            DiscountKey::ThreeYear => self.three_year_bps,
        }
    }

    /// Discount for a schedule entry, as a percentage
    pub fn percent(&self, key: DiscountKey) -> f64 {
        f64::from(self.bps(key)) / 100.0
    }

    /// Whether longer commitments never get a smaller discount
    pub fn is_non_decreasing(&self) -> bool {
        self.yearly_bps <= self.two_year_bps && self.two_year_bps <= self.three_year_bps
    }
}

/// Validated, read-only pricing catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingCatalog {
    tiers: BTreeMap<TierId, TierPrice>,
    addons: BTreeMap<String, Addon>,
    discounts: DiscountSchedule,
    comparison: Vec<ComparisonRowInput>,
}

impl PricingCatalog {
    /// The catalog bundled with the crate
    pub fn standard() -> PricingResult<Self> {
        Self::from_json_str(STANDARD_CATALOG)
    }

    /// Parse and validate a catalog JSON document
    pub fn from_json_str(json: &str) -> PricingResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    /// Read, parse and validate a catalog JSON file
    pub fn from_path(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            PricingError::InvalidCatalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Base prices for a tier
    pub fn tier(&self, tier: TierId) -> PricingResult<&TierPrice> {
        self.tiers
            .get(&tier)
            .ok_or_else(|| PricingError::unknown_tier(tier.to_string()))
    }

    /// Add-on by key
    pub fn addon(&self, key: &str) -> PricingResult<&Addon> {
        self.addons
            .get(key)
            .ok_or_else(|| PricingError::unknown_addon(key))
    }

    /// Unit price of an add-on
    pub fn addon_price(&self, key: &str) -> PricingResult<Money> {
        self.addon(key).map(|addon| addon.price)
    }

    /// All add-ons, ordered by key
    pub fn addons(&self) -> impl Iterator<Item = &Addon> {
        self.addons.values()
    }

    pub fn addon_count(&self) -> usize {
        self.addons.len()
    }

    pub fn discounts(&self) -> &DiscountSchedule {
        &self.discounts
    }

    /// Discount for a schedule entry, in basis points
    pub fn discount_bps(&self, key: DiscountKey) -> u32 {
        self.discounts.bps(key)
    }

    pub fn comparison_rows(&self) -> &[ComparisonRowInput] {
        &self.comparison
    }
}

impl TryFrom<CatalogFile> for PricingCatalog {
    type Error = PricingError;

    fn try_from(file: CatalogFile) -> PricingResult<Self> {
        let mut tiers = BTreeMap::new();
        for tier in TierId::ALL {
            let input = file.tiers.get(&tier).ok_or_else(|| {
                PricingError::InvalidCatalog(format!("missing required tier '{tier}'"))
            })?;
            tiers.insert(tier, validate_tier(tier, input)?);
        }

        let mut addons = BTreeMap::new();
        for (key, input) in file.addons {
            let addon = validate_addon(key, input)?;
            addons.insert(addon.key.clone(), addon);
        }

        let discounts = validate_discounts(&file.discounts)?;

        for row in &file.comparison {
            validate_comparison_row(row, &addons)?;
        }

        tracing::info!(
            tiers = tiers.len(),
            addons = addons.len(),
            comparison_rows = file.comparison.len(),
            "Validated pricing catalog"
        );

        Ok(Self {
            tiers,
            addons,
            discounts,
            comparison: file.comparison,
        })
    }
}

fn validate_tier(tier: TierId, input: &TierPriceInput) -> PricingResult<TierPrice> {
    let context = |e: PricingError| match e {
        PricingError::InvalidCatalog(msg) => {
            PricingError::InvalidCatalog(format!("tier '{tier}': {msg}"))
        }
        other => other,
    };

    input
        .validate()
        .map_err(PricingError::from)
        .map_err(context)?;

    Ok(TierPrice {
        setup_price: Money::from_decimal(input.setup_price).map_err(context)?,
        monthly_price: Money::from_decimal(input.monthly_price).map_err(context)?,
    })
}

fn validate_addon(key: String, input: AddonInput) -> PricingResult<Addon> {
    if key.trim().is_empty() {
        return Err(PricingError::InvalidCatalog(
            "add-on key must not be empty".to_string(),
        ));
    }

    input
        .validate()
        .map_err(|e| PricingError::InvalidCatalog(format!("add-on '{key}': {e}")))?;

    let price = Money::from_decimal(input.price).map_err(|e| match e {
        PricingError::InvalidCatalog(msg) => {
            PricingError::InvalidCatalog(format!("add-on '{key}': {msg}"))
        }
        other => other,
    })?;

    Ok(Addon {
        key,
        label: input.label,
        price,
    })
}

fn validate_discounts(input: &DiscountInput) -> PricingResult<DiscountSchedule> {
    input.validate()?;

    Ok(DiscountSchedule {
        yearly_bps: percent_to_bps("yearly", input.yearly)?,
        two_year_bps: percent_to_bps("twoYear", input.two_year)?,
        three_year_bps: percent_to_bps("threeYear", input.three_year)?,
    })
}

fn percent_to_bps(name: &str, percent: f64) -> PricingResult<u32> {
    // NaN slips past range checks, so check finiteness explicitly
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(PricingError::InvalidCatalog(format!(
            "discount '{name}' must be within 0-100, got {percent}"
        )));
    }

    // Discounts are applied exactly, so they must fit whole basis points
    let scaled = percent * 100.0;
    let bps = scaled.round();
    if (scaled - bps).abs() > BPS_TOLERANCE {
        return Err(PricingError::InvalidCatalog(format!(
            "discount '{name}' must have at most two decimal places, got {percent}"
        )));
    }

    Ok((bps as u32).min(FULL_BPS))
}

fn validate_comparison_row(
    row: &ComparisonRowInput,
    addons: &BTreeMap<String, Addon>,
) -> PricingResult<()> {
    if row.feature.trim().is_empty() {
        return Err(PricingError::InvalidCatalog(
            "comparison feature name must not be empty".to_string(),
        ));
    }

    for (tier, cell) in &row.cells {
        let ComparisonCell::Addon { key } = cell else {
            continue;
        };
        if !addons.contains_key(key) {
            return Err(PricingError::InvalidCatalog(format!(
                "comparison row '{}' references unknown add-on '{}' for tier '{}'",
                row.feature, key, tier
            )));
        }
    }

    Ok(())
}
