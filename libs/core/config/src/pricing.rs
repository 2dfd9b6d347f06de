use crate::{env_optional, env_or_default, env_parse_or, ConfigError, FromEnv};
use std::path::PathBuf;

/// Pricing configuration for quote consumers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingConfig {
    /// Catalog JSON file; `None` means the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Display currency code, validated by the pricing domain
    pub currency: String,
    /// Commitment shown when none is chosen
    pub default_months: u32,
}

impl FromEnv for PricingConfig {
    /// Reads from environment variables with sensible defaults:
    /// - PRICING_CATALOG_PATH: unset (bundled catalog)
    /// - PRICING_CURRENCY: defaults to USD
    /// - PRICING_DEFAULT_MONTHS: defaults to 12
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            catalog_path: env_optional("PRICING_CATALOG_PATH").map(PathBuf::from),
            currency: env_or_default("PRICING_CURRENCY", "USD"),
            default_months: env_parse_or("PRICING_DEFAULT_MONTHS", 12)?,
        })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency: "USD".to_string(),
            default_months: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 3] = [
        "PRICING_CATALOG_PATH",
        "PRICING_CURRENCY",
        "PRICING_DEFAULT_MONTHS",
    ];

    #[test]
    fn test_pricing_config_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = PricingConfig::from_env().unwrap();
            assert_eq!(config, PricingConfig::default());
        });
    }

    #[test]
    fn test_pricing_config_custom_values() {
        temp_env::with_vars(
            [
                ("PRICING_CATALOG_PATH", Some("/etc/pricing/catalog.json")),
                ("PRICING_CURRENCY", Some("EUR")),
                ("PRICING_DEFAULT_MONTHS", Some("36")),
            ],
            || {
                let config = PricingConfig::from_env().unwrap();
                assert_eq!(
                    config.catalog_path,
                    Some(PathBuf::from("/etc/pricing/catalog.json"))
                );
                assert_eq!(config.currency, "EUR");
                assert_eq!(config.default_months, 36);
            },
        );
    }

    #[test]
    fn test_pricing_config_invalid_months() {
        temp_env::with_var("PRICING_DEFAULT_MONTHS", Some("-1"), || {
            let err = PricingConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRICING_DEFAULT_MONTHS"));
        });
    }
}
