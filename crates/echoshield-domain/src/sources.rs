//! Trusted source registry

use serde::{Deserialize, Serialize};

/// Authorities consulted during verification, in the order configured
pub const DEFAULT_TRUSTED_SOURCES: [&str; 7] = [
    "World Health Organization (WHO)",
    "Centers for Disease Control (CDC)",
    "Reuters Fact-Check",
    "AP Fact-Check",
    "PolitiFact",
    "Snopes",
    "FactCheck.org",
];

/// Fixed, ordered list of trusted source names
///
/// Supplied once when the orchestrator is built; never refreshed per cycle.
///
/// # Examples
///
/// ```
/// use echoshield_domain::TrustedSources;
///
/// let sources = TrustedSources::default();
/// assert_eq!(sources.len(), 7);
/// assert_eq!(sources.as_slice()[0], "World Health Organization (WHO)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedSources(Vec<String>);

impl TrustedSources {
    /// Create a registry from an ordered list of names
    ///
    /// # Errors
    /// Returns error if the list is empty or contains a blank name
    pub fn new(sources: Vec<String>) -> Result<Self, String> {
        if sources.is_empty() {
            return Err("At least one trusted source is required".to_string());
        }
        if sources.iter().any(|s| s.trim().is_empty()) {
            return Err("Trusted source names cannot be blank".to_string());
        }
        Ok(Self(sources))
    }

    /// Source names in registry order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of registered sources
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the registry is empty (only possible via deserialization)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over source names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for TrustedSources {
    fn default() -> Self {
        Self(DEFAULT_TRUSTED_SOURCES.iter().map(|s| s.to_string()).collect())
    }
}

impl AsRef<[String]> for TrustedSources {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
