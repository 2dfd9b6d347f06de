pub mod pricing;
pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment, controls log format
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development, // Pretty, verbose logs
    Production,  // JSON logs for aggregation
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Load an environment variable, falling back to a default
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Load an optional environment variable, treating blank values as unset
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Load and parse an environment variable, falling back to a default when unset
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", " Production "] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default() {
        temp_env::with_var("PRICING_TEST_VAR", Some("set"), || {
            assert_eq!(env_or_default("PRICING_TEST_VAR", "fallback"), "set");
        });
        temp_env::with_var_unset("PRICING_TEST_VAR", || {
            assert_eq!(env_or_default("PRICING_TEST_VAR", "fallback"), "fallback");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("PRICING_REQUIRED_VAR", || {
            let err = env_required("PRICING_REQUIRED_VAR").unwrap_err();
            assert!(err.to_string().contains("PRICING_REQUIRED_VAR"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_optional_ignores_blank() {
        temp_env::with_var("PRICING_OPTIONAL_VAR", Some("   "), || {
            assert_eq!(env_optional("PRICING_OPTIONAL_VAR"), None);
        });
        temp_env::with_var("PRICING_OPTIONAL_VAR", Some(" value "), || {
            assert_eq!(
                env_optional("PRICING_OPTIONAL_VAR"),
                Some("value".to_string())
            );
        });
    }

    #[test]
    fn test_env_parse_or() {
        temp_env::with_var_unset("PRICING_MONTHS", || {
            assert_eq!(env_parse_or("PRICING_MONTHS", 1u32).unwrap(), 1);
        });
        temp_env::with_var("PRICING_MONTHS", Some("12"), || {
            assert_eq!(env_parse_or("PRICING_MONTHS", 1u32).unwrap(), 12);
        });
        temp_env::with_var("PRICING_MONTHS", Some("twelve"), || {
            let err = env_parse_or("PRICING_MONTHS", 1u32).unwrap_err();
            assert!(err.to_string().contains("PRICING_MONTHS"));
        });
    }
}
