//! Pricing Domain
//!
//! Quoting engine for the web-design service: tiers, add-ons, commitment
//! discounts and the display strings every price-showing page section uses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Selection validation, quotes, tabs, cards, tables
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐   ┌─────────────┐
//! │ Calculator  │──▶│ Commitment  │  ← 1 / 12 / 24 / 36 months
//! └──────┬──────┘   └─────────────┘
//!        │
//! ┌──────▼──────┐   ┌─────────────┐
//! │   Catalog   │   │   Format    │  ← currency display rule
//! └──────┬──────┘   └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Money, TierId, Currency
//! └─────────────┘
//! ```
//!
//! Everything is synchronous and side-effect free. A `PricingCatalog` is
//! validated once and then shared read-only (typically behind an `Arc`).
//!
//! # Example
//!
//! ```rust
//! use domain_pricing::{PricingCatalog, TierId, compute_prices, format, resolve_commitment};
//!
//! let catalog = PricingCatalog::standard()?;
//! let commitment = resolve_commitment(12)?;
//! let prices = compute_prices(&catalog, TierId::Static, &commitment, ["seo"])?;
//!
//! assert_eq!(format(prices.commitment_total, "USD")?, "$45.00");
//! assert_eq!(prices.period_label, "per year");
//! # Ok::<(), domain_pricing::PricingError>(())
//! ```

pub mod calculator;
pub mod catalog;
pub mod commitment;
pub mod comparison;
pub mod error;
pub mod format;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use calculator::{
    PriceBreakdown, addon_subtotal, commitment_total, compute_prices, monthly_equivalent,
    recurring_monthly_total, setup_total,
};
pub use catalog::{Addon, CatalogFile, DiscountSchedule, PricingCatalog, TierPrice};
pub use commitment::{ALL_COMMITMENTS, CommitmentLength, resolve_commitment};
pub use comparison::{ComparisonCell, ComparisonRow, ResolvedCell};
pub use error::{KeyKind, PricingError, PricingResult};
pub use format::format;
pub use models::{Currency, DiscountKey, Money, TierId};
pub use service::{AddonLine, FormattedBreakdown, PricingService, Quote, Selection};
