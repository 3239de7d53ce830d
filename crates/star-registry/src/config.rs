//! Registry configuration.

use serde::{Deserialize, Serialize};
use star_registry_core::{ValidationMode, DEFAULT_DOMAIN_TAG};

/// Default freshness window for ownership challenges.
pub const DEFAULT_CHALLENGE_WINDOW_SECS: i64 = 300;

/// Configuration for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Oldest challenge accepted, in seconds. Inclusive.
    pub challenge_window_secs: i64,
    /// Tag embedded in issued challenges.
    pub domain_tag: String,
    /// Reject submissions whose challenge does not carry `domain_tag`.
    pub require_domain_tag: bool,
    /// What `validate_chain` checks.
    pub validation_mode: ValidationMode,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            challenge_window_secs: DEFAULT_CHALLENGE_WINDOW_SECS,
            domain_tag: DEFAULT_DOMAIN_TAG.to_string(),
            require_domain_tag: false,
            validation_mode: ValidationMode::PerBlock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"validation_mode":"WithLinks"}"#).unwrap();
        assert_eq!(config.challenge_window_secs, 300);
        assert_eq!(config.domain_tag, "starRegistry");
        assert!(!config.require_domain_tag);
        assert_eq!(config.validation_mode, ValidationMode::WithLinks);
    }
}
