//! Pricing Quote
//!
//! Command-line front end for the pricing engine. Prints the same figures the
//! website's package cards, hosting plan tabs, add-on list and comparison
//! table show, for any catalog file and display currency.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_pricing::{PricingService, Selection, TierId, resolve_commitment};
use eyre::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod config;
mod render;

use config::Config;

#[derive(Parser)]
#[command(name = "pricing-quote")]
#[command(about = "Quote web-design packages, hosting plans and add-ons")]
struct Cli {
    /// Catalog JSON file (overrides PRICING_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Display currency code: USD, EUR or GBP (overrides PRICING_CURRENCY)
    #[arg(short, long, global = true)]
    currency: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one tier, commitment and add-on selection
    Quote {
        /// Tier id (static, dynamic, ecommerce)
        #[arg(short, long)]
        tier: String,

        /// Commitment in months (1, 12, 24, 36). Defaults to PRICING_DEFAULT_MONTHS.
        #[arg(short, long)]
        months: Option<u32>,

        /// Add-on keys
        #[arg(short, long, value_delimiter = ',')]
        addons: Vec<String>,
    },

    /// Show every commitment for one tier
    Plans {
        /// Tier id (static, dynamic, ecommerce)
        #[arg(short, long)]
        tier: String,

        /// Add-on keys folded into the monthly figure
        #[arg(short, long, value_delimiter = ',')]
        addons: Vec<String>,
    },

    /// Show every tier for one commitment
    Packages {
        /// Commitment in months (1, 12, 24, 36). Defaults to PRICING_DEFAULT_MONTHS.
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// List add-ons
    Addons,

    /// Show the feature comparison table
    Compare,

    /// Load and validate the catalog, then exit
    Validate,
}

fn main() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let cli = Cli::parse();

    let catalog = Arc::new(config.load_catalog(cli.catalog.as_deref())?);
    let service = PricingService::new(Arc::clone(&catalog));
    let currency = config.currency(cli.currency.as_deref())?;

    match cli.command {
        Commands::Quote {
            tier,
            months,
            addons,
        } => {
            let tier = TierId::parse(&tier)?;
            let commitment = resolve_commitment(config.months(months))?;
            let selection = Selection::new(&catalog, tier, commitment, &addons, currency)?;
            let quote = service.quote(&selection)?;
            info!(tier = %selection.tier, months = commitment.months, "Quoted selection");
            emit(cli.json, &quote, || render::quote(&quote))?;
        }

        Commands::Plans { tier, addons } => {
            let tier = TierId::parse(&tier)?;
            let keys = validated_addons(&service, &addons)?;
            let quotes = service.plan_tabs(tier, &keys, currency)?;
            emit(cli.json, &quotes, || render::plan_tabs(tier, &quotes))?;
        }

        Commands::Packages { months } => {
            let commitment = resolve_commitment(config.months(months))?;
            let quotes = service.package_cards(&commitment, currency)?;
            emit(cli.json, &quotes, || render::package_cards(&quotes))?;
        }

        Commands::Addons => {
            let lines = service.addon_list(currency);
            emit(cli.json, &lines, || render::addons(&lines))?;
        }

        Commands::Compare => {
            let rows = service.comparison_table(currency)?;
            emit(cli.json, &rows, || render::comparison(&rows))?;
        }

        Commands::Validate => {
            println!(
                "Catalog OK: {} tiers, {} add-ons, {} comparison rows",
                TierId::ALL.len(),
                catalog.addon_count(),
                catalog.comparison_rows().len()
            );
        }
    }

    Ok(())
}

fn validated_addons(service: &PricingService, keys: &[String]) -> Result<BTreeSet<String>> {
    let mut validated = BTreeSet::new();
    for key in keys.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
        service.catalog().addon(key)?;
        validated.insert(key.to_string());
    }
    Ok(validated)
}

fn emit<T: Serialize>(json: bool, value: &T, table: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", table());
    }
    Ok(())
}
