//! Human-readable output for the pricing quote CLI

use domain_pricing::{AddonLine, ComparisonRow, Quote, ResolvedCell, TierId};
use std::fmt::Write;

/// A single quote as labelled lines
pub fn quote(quote: &Quote) -> String {
    let b = &quote.breakdown;
    let d = &quote.display;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} plan, {} ({})",
        b.tier.label(),
        b.tab_label,
        quote.currency
    );
    let _ = writeln!(out, "{:<22} {:>14}", "Setup", d.setup_total);
    let _ = writeln!(
        out,
        "{:<22} {:>14}",
        "Monthly (base + add-ons)", d.recurring_monthly_total
    );
    let _ = writeln!(out, "{:<22} {:>14}", "Add-ons", d.addon_subtotal);
    let _ = write!(
        out,
        "{:<22} {:>14} {}",
        "Total", d.commitment_total, b.period_label
    );
    out
}

/// Hosting plan tabs for one tier
pub fn plan_tabs(tier: TierId, quotes: &[Quote]) -> String {
    let mut out = format!("Hosting plans for {}\n\n", tier.label());
    let _ = writeln!(
        out,
        "{:<10} {:>14}  {:<14} {:>14}",
        "Term", "Price", "Billed", "Monthly"
    );
    out.push_str(&"-".repeat(56));

    for q in quotes {
        let _ = write!(
            out,
            "\n{:<10} {:>14}  {:<14} {:>14}",
            q.breakdown.tab_label,
            q.display.commitment_total,
            q.breakdown.period_label,
            q.display.recurring_monthly_total
        );
    }
    out
}

/// Package cards, one line per tier
pub fn package_cards(quotes: &[Quote]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>14} {:>14}  {}", "Package", "Setup", "Price", "Billed");
    out.push_str(&"-".repeat(56));

    for q in quotes {
        let _ = write!(
            out,
            "\n{:<12} {:>14} {:>14}  {}",
            q.breakdown.tier.label(),
            q.display.setup_total,
            q.display.commitment_total,
            q.breakdown.period_label
        );
    }
    out
}

/// Add-on list
pub fn addons(lines: &[AddonLine]) -> String {
    if lines.is_empty() {
        return "No add-ons in catalog".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<26} {:>12}", "Key", "Add-on", "Per month");
    out.push_str(&"-".repeat(54));

    for line in lines {
        let _ = write!(out, "\n{:<14} {:<26} {:>12}", line.key, line.label, line.display);
    }
    out
}

/// Feature comparison table
pub fn comparison(rows: &[ComparisonRow]) -> String {
    let mut out = format!("{:<22}", "Feature");
    for tier in TierId::ALL {
        let _ = write!(out, " {:>14}", tier.label());
    }
    out.push('\n');
    out.push_str(&"-".repeat(22 + 15 * TierId::ALL.len()));

    for row in rows {
        let _ = write!(out, "\n{:<22}", row.feature);
        for (_, cell) in &row.cells {
            let _ = write!(out, " {:>14}", cell_text(cell));
        }
    }
    out
}

fn cell_text(cell: &ResolvedCell) -> String {
    match cell {
        ResolvedCell::Included => "yes".to_string(),
        ResolvedCell::Excluded => "-".to_string(),
        ResolvedCell::Price { display, .. } => format!("+{display}"),
        ResolvedCell::Text { value } => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_pricing::{Currency, PricingCatalog, PricingService, Selection};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    fn service() -> PricingService {
        PricingService::new(Arc::new(PricingCatalog::standard().unwrap()))
    }

    #[test]
    fn test_quote_lists_every_figure() {
        let service = service();
        let selection =
            Selection::parse(service.catalog(), "static", 12, ["seo"], "USD").unwrap();
        let text = quote(&service.quote(&selection).unwrap());

        assert!(text.starts_with("Static plan, 1 Year (USD)"));
        assert!(text.contains("$150.00"));
        assert!(text.contains("$45.00 per year"));
        assert!(text.contains("$4.00"));
    }

    #[test]
    fn test_plan_tabs_use_commitment_captions() {
        let service = service();
        let quotes = service
            .plan_tabs(TierId::Dynamic, &BTreeSet::new(), Currency::Usd)
            .unwrap();
        let text = plan_tabs(TierId::Dynamic, &quotes);

        for caption in ["Monthly", "1 Year", "2 Years", "3 Years"] {
            assert!(text.contains(caption), "missing {caption}");
        }
    }

    #[test]
    fn test_comparison_marks_addon_prices() {
        let rows = service()
            .comparison_table(Currency::Usd)
            .unwrap();
        let text = comparison(&rows);
        assert!(text.contains("+$4.00"));
        assert!(text.contains("Up to 5"));
    }

    #[test]
    fn test_empty_addons() {
        assert_eq!(addons(&[]), "No add-ons in catalog");
    }
}
