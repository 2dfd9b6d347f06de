use strum::Display;
use thiserror::Error;

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// What kind of catalog key a lookup missed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum KeyKind {
    Tier,
    Addon,
}

/// Errors that can occur in the pricing domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Tier id or add-on key absent from the catalog
    #[error("Unknown {kind} key: {key}")]
    UnknownKey { kind: KeyKind, key: String },

    /// Commitment length outside 1, 12, 24 and 36 months
    #[error("Unsupported commitment length: {0} months")]
    UnsupportedCommitment(u32),

    /// Currency code the formatter does not recognize
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Catalog failed validation at construction time
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl PricingError {
    pub fn unknown_tier(key: impl Into<String>) -> Self {
        PricingError::UnknownKey {
            kind: KeyKind::Tier,
            key: key.into(),
        }
    }

    pub fn unknown_addon(key: impl Into<String>) -> Self {
        PricingError::UnknownKey {
            kind: KeyKind::Addon,
            key: key.into(),
        }
    }

    /// Whether the caller can recover by fixing its input.
    ///
    /// `InvalidCatalog` is a startup failure; everything else is a per-call
    /// selection problem that can be mapped to a user-facing message.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PricingError::InvalidCatalog(_))
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        PricingError::InvalidCatalog(err.to_string())
    }
}

impl From<validator::ValidationErrors> for PricingError {
    fn from(err: validator::ValidationErrors) -> Self {
        PricingError::InvalidCatalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message_names_kind() {
        let err = PricingError::unknown_addon("hosting-plus");
        assert_eq!(err.to_string(), "Unknown addon key: hosting-plus");

        let err = PricingError::unknown_tier("premium");
        assert_eq!(err.to_string(), "Unknown tier key: premium");
    }

    #[test]
    fn test_only_invalid_catalog_is_fatal() {
        assert!(PricingError::UnsupportedCommitment(6).is_recoverable());
        assert!(PricingError::UnsupportedCurrency("XYZ".into()).is_recoverable());
        assert!(PricingError::unknown_tier("x").is_recoverable());
        assert!(!PricingError::InvalidCatalog("negative price".into()).is_recoverable());
    }
}
