//! Feature comparison table
//!
//! Each row names a feature and says, per tier, whether it is included,
//! excluded, available as a priced add-on, or described by literal text.
//! Literal text must be declared with the `text` kind; an add-on cell whose
//! key is missing from the catalog is an error, never a pass-through string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::PricingCatalog;
use crate::error::PricingResult;
use crate::models::{Currency, Money, TierId};

/// Cell as declared in the catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComparisonCell {
    Included,
    Excluded,
    Addon { key: String },
    Text { value: String },
}

/// Row as declared in the catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonRowInput {
    pub feature: String,
    pub cells: BTreeMap<TierId, ComparisonCell>,
}

/// Cell ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResolvedCell {
    Included,
    Excluded,
    Price { amount: Money, display: String },
    Text { value: String },
}

/// Row ready for display, one cell per tier in tier order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub feature: String,
    pub cells: Vec<(TierId, ResolvedCell)>,
}

/// Resolve one row against a catalog. Tiers the row omits render as excluded.
pub fn resolve_row(
    catalog: &PricingCatalog,
    row: &ComparisonRowInput,
    currency: Currency,
) -> PricingResult<ComparisonRow> {
    let cells = TierId::ALL
        .iter()
        .map(|tier| {
            let cell = match row.cells.get(tier) {
                None | Some(ComparisonCell::Excluded) => ResolvedCell::Excluded,
                Some(ComparisonCell::Included) => ResolvedCell::Included,
                Some(ComparisonCell::Addon { key }) => {
                    let amount = catalog.addon_price(key)?;
                    ResolvedCell::Price {
                        amount,
                        display: currency.format(amount),
                    }
                }
                Some(ComparisonCell::Text { value }) => ResolvedCell::Text {
                    value: value.clone(),
                },
            };
            Ok((*tier, cell))
        })
        .collect::<PricingResult<Vec<_>>>()?;

    Ok(ComparisonRow {
        feature: row.feature.clone(),
        cells,
    })
}

/// Resolve every row the catalog declares
pub fn resolve_table(
    catalog: &PricingCatalog,
    currency: Currency,
) -> PricingResult<Vec<ComparisonRow>> {
    catalog
        .comparison_rows()
        .iter()
        .map(|row| resolve_row(catalog, row, currency))
        .collect()
}
