//! Price Calculator
//!
//! Pure computations over a validated catalog. Nothing here allocates shared
//! state or logs above `debug`; every function returns the same result for
//! the same catalog and selection.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::PricingCatalog;
use crate::commitment::CommitmentLength;
use crate::error::PricingResult;
use crate::models::{MINOR_UNITS, Money, TierId};

/// Basis points in 100%
const FULL_BPS: u128 = 10_000;

/// Every figure a page section may show for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub tier: TierId,
    pub months: u32,
    pub setup_total: Money,
    pub recurring_monthly_total: Money,
    pub addon_subtotal: Money,
    pub commitment_total: Money,
    pub period_label: &'static str,
    pub tab_label: &'static str,
}

/// One-off setup price of a tier. No discount ever applies.
pub fn setup_total(catalog: &PricingCatalog, tier: TierId) -> PricingResult<Money> {
    Ok(catalog.tier(tier)?.setup_price)
}

/// Sum of the selected add-on prices.
///
/// Keys are treated as a set: duplicates count once and order is irrelevant.
/// An empty selection sums to zero.
pub fn addon_subtotal<I, S>(catalog: &PricingCatalog, addon_keys: I) -> PricingResult<Money>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keys: BTreeSet<String> = addon_keys
        .into_iter()
        .map(|key| key.as_ref().to_string())
        .collect();

    keys.iter().map(|key| catalog.addon_price(key)).sum()
}

/// Undiscounted per-month figure: tier base price plus selected add-ons
pub fn recurring_monthly_total<I, S>(
    catalog: &PricingCatalog,
    tier: TierId,
    addon_keys: I,
) -> PricingResult<Money>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let base = catalog.tier(tier)?.monthly_price;
    Ok(base + addon_subtotal(catalog, addon_keys)?)
}

/// Headline price for a billing period.
///
/// Month-to-month returns the tier's base monthly price. Longer commitments
/// charge `billed_months` monthly units less the catalog discount, rounded
/// once to the nearest whole unit (half rounds up). Add-ons are never part of
/// this figure.
pub fn commitment_total(
    catalog: &PricingCatalog,
    tier: TierId,
    commitment: &CommitmentLength,
) -> PricingResult<Money> {
    let monthly = catalog.tier(tier)?.monthly_price;

    let Some(discount_key) = commitment.discount_key else {
        return Ok(monthly);
    };

    let discount_bps = u128::from(catalog.discount_bps(discount_key));
    let units = discounted_whole_units(
        u128::from(monthly.amount),
        u128::from(commitment.billed_months),
        discount_bps,
    );

    Ok(Money::from_minor(units.saturating_mul(MINOR_UNITS)))
}

/// round(minor / 100 * billed * (1 - bps / 10000)) in exact integer arithmetic
fn discounted_whole_units(monthly_minor: u128, billed_months: u128, discount_bps: u128) -> u64 {
    let scale = u128::from(MINOR_UNITS) * FULL_BPS;
    let numerator = monthly_minor * billed_months * (FULL_BPS - discount_bps.min(FULL_BPS));
    let units = (numerator + scale / 2) / scale;
    u64::try_from(units).unwrap_or(u64::MAX / MINOR_UNITS)
}

/// Price per calendar month implied by a commitment's headline total
pub fn monthly_equivalent(total: Money, commitment: &CommitmentLength) -> f64 {
    total.to_decimal() / f64::from(commitment.months.max(1))
}

/// All figures for one tier, commitment and add-on selection
pub fn compute_prices<I, S>(
    catalog: &PricingCatalog,
    tier: TierId,
    commitment: &CommitmentLength,
    addon_keys: I,
) -> PricingResult<PriceBreakdown>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keys: BTreeSet<String> = addon_keys
        .into_iter()
        .map(|key| key.as_ref().to_string())
        .collect();

    let breakdown = PriceBreakdown {
        tier,
        months: commitment.months,
        setup_total: setup_total(catalog, tier)?,
        recurring_monthly_total: recurring_monthly_total(catalog, tier, &keys)?,
        addon_subtotal: addon_subtotal(catalog, &keys)?,
        commitment_total: commitment_total(catalog, tier, commitment)?,
        period_label: commitment.period_label(),
        tab_label: commitment.tab_label(),
    };

    tracing::debug!(
        tier = %tier,
        months = commitment.months,
        addons = keys.len(),
        commitment_total = breakdown.commitment_total.amount,
        "Computed price breakdown"
    );

    Ok(breakdown)
}
