use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::calculator::{PriceBreakdown, compute_prices};
use crate::catalog::PricingCatalog;
use crate::commitment::{ALL_COMMITMENTS, CommitmentLength, resolve_commitment};
use crate::comparison::{ComparisonRow, resolve_table};
use crate::error::PricingResult;
use crate::models::{Currency, Money, TierId};

/// A user's current choice, validated against a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub tier: TierId,
    pub commitment: CommitmentLength,
    pub addon_keys: BTreeSet<String>,
    pub currency: Currency,
}

impl Selection {
    /// Build a selection from raw UI values, checking every part up front
    pub fn parse<I, S>(
        catalog: &PricingCatalog,
        tier_id: &str,
        months: u32,
        addon_keys: I,
        currency_code: &str,
    ) -> PricingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tier = TierId::parse(tier_id)?;
        let commitment = resolve_commitment(months)?;
        let currency = Currency::parse(currency_code)?;
        Self::new(catalog, tier, commitment, addon_keys, currency)
    }

    /// Build a selection from already-typed parts, checking the add-on keys
    pub fn new<I, S>(
        catalog: &PricingCatalog,
        tier: TierId,
        commitment: CommitmentLength,
        addon_keys: I,
        currency: Currency,
    ) -> PricingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = BTreeSet::new();
        for key in addon_keys {
            let key = key.as_ref().trim();
            if key.is_empty() {
                continue;
            }
            catalog.addon(key)?;
            keys.insert(key.to_string());
        }

        Ok(Self {
            tier,
            commitment,
            addon_keys: keys,
            currency,
        })
    }
}

/// Display strings for a breakdown, all in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBreakdown {
    pub setup_total: String,
    pub recurring_monthly_total: String,
    pub addon_subtotal: String,
    pub commitment_total: String,
}

impl FormattedBreakdown {
    fn new(breakdown: &PriceBreakdown, currency: Currency) -> Self {
        Self {
            setup_total: currency.format(breakdown.setup_total),
            recurring_monthly_total: currency.format(breakdown.recurring_monthly_total),
            addon_subtotal: currency.format(breakdown.addon_subtotal),
            commitment_total: currency.format(breakdown.commitment_total),
        }
    }
}

/// Numeric breakdown plus its display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub currency: Currency,
    pub breakdown: PriceBreakdown,
    pub display: FormattedBreakdown,
}

/// An add-on as listed on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddonLine {
    pub key: String,
    pub label: String,
    pub price: Money,
    pub display: String,
}

/// Entry point for page sections that show prices
#[derive(Debug, Clone)]
pub struct PricingService {
    catalog: Arc<PricingCatalog>,
}

impl PricingService {
    pub fn new(catalog: Arc<PricingCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Price a full selection
    pub fn quote(&self, selection: &Selection) -> PricingResult<Quote> {
        self.quote_parts(
            selection.tier,
            &selection.commitment,
            &selection.addon_keys,
            selection.currency,
        )
    }

    /// One quote per commitment length, shortest first (hosting plan tabs)
    pub fn plan_tabs(
        &self,
        tier: TierId,
        addon_keys: &BTreeSet<String>,
        currency: Currency,
    ) -> PricingResult<Vec<Quote>> {
        ALL_COMMITMENTS
            .iter()
            .map(|commitment| self.quote_parts(tier, commitment, addon_keys, currency))
            .collect()
    }

    /// One add-on-free quote per tier (package cards)
    pub fn package_cards(
        &self,
        commitment: &CommitmentLength,
        currency: Currency,
    ) -> PricingResult<Vec<Quote>> {
        let none = BTreeSet::new();
        TierId::ALL
            .iter()
            .map(|tier| self.quote_parts(*tier, commitment, &none, currency))
            .collect()
    }

    /// Every add-on with its display price, ordered by key
    pub fn addon_list(&self, currency: Currency) -> Vec<AddonLine> {
        self.catalog
            .addons()
            .map(|addon| AddonLine {
                key: addon.key.clone(),
                label: addon.label.clone(),
                price: addon.price,
                display: currency.format(addon.price),
            })
            .collect()
    }

    /// The feature comparison table
    pub fn comparison_table(&self, currency: Currency) -> PricingResult<Vec<ComparisonRow>> {
        resolve_table(&self.catalog, currency)
    }

    fn quote_parts(
        &self,
        tier: TierId,
        commitment: &CommitmentLength,
        addon_keys: &BTreeSet<String>,
        currency: Currency,
    ) -> PricingResult<Quote> {
        let breakdown = compute_prices(&self.catalog, tier, commitment, addon_keys)?;
        let display = FormattedBreakdown::new(&breakdown, currency);

        Ok(Quote {
            currency,
            breakdown,
            display,
        })
    }
}
