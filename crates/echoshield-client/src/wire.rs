//! Wire decoding of claims returned by the claim store
//!
//! The store returns loosely-typed JSON objects. A record is usable when it
//! has an integer `id` and a string `claim`; any other missing field falls
//! back to a default. Records that fail those checks are skipped with a
//! warning instead of failing the whole batch.

use chrono::{DateTime, NaiveDateTime, Utc};
use echoshield_domain::Claim;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Source label used when the store omits one
pub const DEFAULT_SOURCE: &str = "Unknown";

/// Category label used when the store omits one
pub const DEFAULT_CATEGORY: &str = "Other";

/// Claim record as sent by the claim store
#[derive(Debug, Deserialize)]
struct WireClaim {
    id: Option<i64>,
    claim: Option<String>,
    source: Option<String>,
    timestamp: Option<String>,
    engagement: Option<u64>,
    category: Option<String>,
}

/// Decode a batch of raw claim records
///
/// Malformed records are dropped; the order of the remaining claims is
/// preserved. `fetched_at` stands in for a missing or unparseable timestamp.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use echoshield_client::wire::decode_claims;
/// use serde_json::json;
///
/// let raw = vec![
///     json!({"id": 1, "claim": "5G causes colds", "engagement": 12000}),
///     json!({"claim": "no id"}),
/// ];
/// let claims = decode_claims(raw, Utc::now());
/// assert_eq!(claims.len(), 1);
/// assert_eq!(claims[0].source, "Unknown");
/// ```
pub fn decode_claims(records: Vec<Value>, fetched_at: DateTime<Utc>) -> Vec<Claim> {
    let total = records.len();
    let claims: Vec<Claim> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match decode_claim(record, fetched_at) {
            Ok(claim) => Some(claim),
            Err(reason) => {
                warn!(position, reason = reason.as_str(), "Skipping malformed claim");
                None
            }
        })
        .collect();

    if claims.len() < total {
        warn!("Decoded {} of {} claims", claims.len(), total);
    }
    claims
}

fn decode_claim(record: Value, fetched_at: DateTime<Utc>) -> Result<Claim, String> {
    let wire: WireClaim = serde_json::from_value(record).map_err(|e| e.to_string())?;

    let id = wire.id.ok_or("missing id")?;
    let text = wire.claim.ok_or("missing claim text")?;
    let timestamp = wire
        .timestamp
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(fetched_at);

    Ok(Claim::new(
        id,
        text,
        wire.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        timestamp,
        wire.engagement.unwrap_or(0),
        wire.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    ))
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one taken as UTC
///
/// # Examples
///
/// ```
/// use echoshield_client::wire::parse_timestamp;
///
/// assert!(parse_timestamp("2024-05-01T10:00:00Z").is_some());
/// assert!(parse_timestamp("2024-05-01T10:00:00.123456").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use echoshield_domain::ClaimId;
    use serde_json::json;

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_decode_full_record() {
        let raw = vec![json!({
            "id": 3,
            "claim": "5G technology causes COVID-19 infections",
            "source": "Facebook",
            "timestamp": "2024-03-01T12:30:00.500000",
            "trust_score": 5,
            "status": "MISINFORMATION",
            "category": "Technology",
            "engagement": 42156
        })];

        let claims = decode_claims(raw, fetched_at());
        assert_eq!(claims.len(), 1);

        let claim = &claims[0];
        assert_eq!(claim.id, ClaimId::new(3));
        assert_eq!(claim.text, "5G technology causes COVID-19 infections");
        assert_eq!(claim.source, "Facebook");
        assert_eq!(claim.category, "Technology");
        assert_eq!(claim.engagement, 42156);
        assert_eq!(claim.timestamp.to_rfc3339(), "2024-03-01T12:30:00.500+00:00");
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let claims = decode_claims(vec![json!({"id": 9, "claim": ""})], fetched_at());
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "");
        assert_eq!(claims[0].source, DEFAULT_SOURCE);
        assert_eq!(claims[0].category, DEFAULT_CATEGORY);
        assert_eq!(claims[0].engagement, 0);
        assert_eq!(claims[0].timestamp, fetched_at());
    }

    #[test]
    fn test_skips_malformed_and_keeps_order() {
        let raw = vec![
            json!({"id": 1, "claim": "first"}),
            json!({"claim": "missing id"}),
            json!({"id": 2}),
            json!({"id": "three", "claim": "string id"}),
            json!({"id": 4, "claim": "negative engagement", "engagement": -5}),
            json!("not an object"),
            json!({"id": 5, "claim": "last", "timestamp": "garbage"}),
        ];

        let claims = decode_claims(raw, fetched_at());
        let ids: Vec<i64> = claims.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(claims[1].timestamp, fetched_at());
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-03-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    }
}
