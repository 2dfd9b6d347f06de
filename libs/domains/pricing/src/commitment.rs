//! Commitment lengths and their billing allowances.
//!
//! The four commitment options are fixed. Multi-month commitments bill fewer
//! monthly units than calendar months (`billed_months`) and then apply the
//! catalog's percentage discount on top.

use serde::Serialize;

use crate::error::{PricingError, PricingResult};
use crate::models::DiscountKey;

/// A supported billing commitment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentLength {
    /// Calendar months covered
    pub months: u32,
    /// Discount schedule entry, `None` for month-to-month
    pub discount_key: Option<DiscountKey>,
    /// Monthly-price units charged before the percentage discount
    pub billed_months: u32,
}

pub const MONTHLY: CommitmentLength = CommitmentLength {
    months: 1,
    discount_key: None,
    billed_months: 1,
};

pub const YEARLY: CommitmentLength = CommitmentLength {
    months: 12,
    discount_key: Some(DiscountKey::Yearly),
    billed_months: 10,
};

pub const TWO_YEAR: CommitmentLength = CommitmentLength {
    months: 24,
    discount_key: Some(DiscountKey::TwoYear),
    billed_months: 18,
};

pub const THREE_YEAR: CommitmentLength = CommitmentLength {
    months: 36,
    discount_key: Some(DiscountKey::ThreeYear),
    billed_months: 25,
};

/// Every commitment, shortest first
pub const ALL_COMMITMENTS: [CommitmentLength; 4] = [MONTHLY, YEARLY, TWO_YEAR, THREE_YEAR];

/// Map a month count to its commitment record.
///
/// Only 1, 12, 24 and 36 are accepted; anything else is `UnsupportedCommitment`.
pub fn resolve_commitment(months: u32) -> PricingResult<CommitmentLength> {
    ALL_COMMITMENTS
        .iter()
        .copied()
        .find(|c| c.months == months)
        .ok_or(PricingError::UnsupportedCommitment(months))
}

impl CommitmentLength {
    pub fn is_monthly(&self) -> bool {
        self.discount_key.is_none()
    }

    /// Label shown next to the headline price
    pub fn period_label(&self) -> &'static str {
        match self.discount_key {
            None => "per month",
            Some(DiscountKey::Yearly) => "per year",
            Some(DiscountKey::TwoYear) => "every 2 years",
            Some(DiscountKey::ThreeYear) => "every 3 years",
        }
    }

    /// Short tab caption
    pub fn tab_label(&self) -> &'static str {
        match self.discount_key {
            None => "Monthly",
            Some(DiscountKey::Yearly) => "1 Year",
            Some(DiscountKey::TwoYear) => "2 Years",
            Some(DiscountKey::ThreeYear) => "3 Years",
        }
    }

    /// Calendar months included without charge
    pub fn free_months(&self) -> u32 {
        self.months - self.billed_months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported_lengths() {
        let yearly = resolve_commitment(12).unwrap();
        assert_eq!(yearly.billed_months, 10);
        assert_eq!(yearly.discount_key, Some(DiscountKey::Yearly));
        assert_eq!(yearly.period_label(), "per year");

        let two = resolve_commitment(24).unwrap();
        assert_eq!(two.billed_months, 18);
        assert_eq!(two.period_label(), "every 2 years");

        let three = resolve_commitment(36).unwrap();
        assert_eq!(three.billed_months, 25);
        assert_eq!(three.free_months(), 11);
        assert_eq!(three.period_label(), "every 3 years");

        let monthly = resolve_commitment(1).unwrap();
        assert!(monthly.is_monthly());
        assert_eq!(monthly.period_label(), "per month");
    }

    #[test]
    fn test_resolve_rejects_other_lengths() {
        for months in [0, 2, 6, 11, 13, 48, u32::MAX] {
            assert_eq!(
                resolve_commitment(months).unwrap_err(),
                PricingError::UnsupportedCommitment(months)
            );
        }
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = ALL_COMMITMENTS.iter().map(|c| c.tab_label()).collect();
        assert_eq!(labels, vec!["Monthly", "1 Year", "2 Years", "3 Years"]);
    }

    #[test]
    fn test_all_commitments_ascending() {
        let months: Vec<u32> = ALL_COMMITMENTS.iter().map(|c| c.months).collect();
        assert_eq!(months, vec![1, 12, 24, 36]);
        assert!(ALL_COMMITMENTS.iter().all(|c| c.billed_months <= c.months));
    }
}
