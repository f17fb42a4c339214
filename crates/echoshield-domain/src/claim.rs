//! Claim module - the unit of work flowing through a verification cycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a claim as assigned by the claim store
///
/// Identity of a claim is its id alone; two claims with the same id are the
/// same claim even if their text differs between fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(i64);

impl ClaimId {
    /// Create a ClaimId from the store's integer id
    ///
    /// # Examples
    ///
    /// ```
    /// use echoshield_domain::ClaimId;
    ///
    /// let id = ClaimId::new(42);
    /// assert_eq!(id.value(), 42);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ClaimId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A claim fetched from the claim store
///
/// Claims are immutable for the duration of a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// The assertion itself
    pub text: String,

    /// Where the claim was observed (platform, outlet, ...)
    pub source: String,

    /// When the claim was observed
    pub timestamp: DateTime<Utc>,

    /// Shares, likes and replies combined
    pub engagement: u64,

    /// Store-assigned category label
    pub category: String,
}

impl Claim {
    /// Create a new claim
    pub fn new(
        id: impl Into<ClaimId>,
        text: impl Into<String>,
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
        engagement: u64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source: source.into(),
            timestamp,
            engagement,
            category: category.into(),
        }
    }
}
