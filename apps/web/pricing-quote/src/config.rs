//! Configuration for the pricing quote CLI

use core_config::pricing::PricingConfig;
use core_config::{Environment, FromEnv};
use domain_pricing::{Currency, PricingCatalog};
use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub pricing: PricingConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            environment: Environment::from_env(),
            pricing: PricingConfig::from_env()?,
        })
    }

    /// Catalog file to load: the command line wins over `PRICING_CATALOG_PATH`
    pub fn catalog_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.pricing.catalog_path.clone())
    }

    /// Load and validate the catalog. Failure here is fatal for every command.
    pub fn load_catalog(&self, cli_override: Option<&Path>) -> Result<PricingCatalog> {
        match self.catalog_path(cli_override) {
            Some(path) => {
                info!(path = %path.display(), "Loading pricing catalog");
                PricingCatalog::from_path(&path)
                    .wrap_err_with(|| format!("Pricing catalog {} is invalid", path.display()))
            }
            None => {
                info!("Using bundled pricing catalog");
                PricingCatalog::standard().wrap_err("Bundled pricing catalog is invalid")
            }
        }
    }

    /// Display currency: the command line wins over `PRICING_CURRENCY`
    pub fn currency(&self, cli_override: Option<&str>) -> Result<Currency> {
        let code = cli_override.unwrap_or(&self.pricing.currency);
        Ok(Currency::parse(code)?)
    }

    /// Commitment months: the command line wins over `PRICING_DEFAULT_MONTHS`
    pub fn months(&self, cli_override: Option<u32>) -> u32 {
        cli_override.unwrap_or(self.pricing.default_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            environment: Environment::Development,
            pricing: PricingConfig {
                catalog_path: Some(PathBuf::from("/srv/catalog.json")),
                currency: "EUR".to_string(),
                default_months: 24,
            },
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = config();
        assert_eq!(
            config.catalog_path(Some(Path::new("local.json"))),
            Some(PathBuf::from("local.json"))
        );
        assert_eq!(
            config.catalog_path(None),
            Some(PathBuf::from("/srv/catalog.json"))
        );
        assert_eq!(config.currency(Some("gbp")).unwrap(), Currency::Gbp);
        assert_eq!(config.currency(None).unwrap(), Currency::Eur);
        assert_eq!(config.months(Some(1)), 1);
        assert_eq!(config.months(None), 24);
    }

    #[test]
    fn test_unknown_currency_is_an_error() {
        assert!(config().currency(Some("XYZ")).is_err());
    }

    #[test]
    fn test_bundled_catalog_when_no_path() {
        let config = Config {
            environment: Environment::Development,
            pricing: PricingConfig::default(),
        };
        assert!(config.load_catalog(None).is_ok());
    }

    #[test]
    fn test_missing_catalog_file_is_fatal() {
        let err = config()
            .load_catalog(Some(Path::new("/nonexistent/catalog.json")))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
