//! Credential claims and the issued token pair.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved claim carrying the subject principal
pub const CLAIM_SUBJECT: &str = "user_id";

/// Reserved claim carrying the absolute expiry timestamp
pub const CLAIM_EXPIRY: &str = "exp";

/// Open claim mapping embedded in a signed credential.
///
/// Callers may attach arbitrary string claims; the reserved keys
/// [`CLAIM_SUBJECT`] and [`CLAIM_EXPIRY`] are written last at issuance time
/// and always overwrite colliding caller-supplied keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeMap<String, Value>);

impl ClaimSet {
    /// Builds the claim set signed into an access token: caller claims
    /// first, then the reserved keys so their precedence is structural.
    pub fn for_issue(subject: &str, claims: &HashMap<String, String>, expires_at: i64) -> Self {
        let mut map: BTreeMap<String, Value> = claims
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();

        map.insert(CLAIM_SUBJECT.to_string(), Value::String(subject.to_string()));
        map.insert(CLAIM_EXPIRY.to_string(), Value::from(expires_at));

        Self(map)
    }

    /// Raw claim lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The subject principal, if present as a string claim
    pub fn subject(&self) -> Option<&str> {
        self.0.get(CLAIM_SUBJECT).and_then(Value::as_str)
    }

    /// The expiry timestamp, if present as a numeric claim
    pub fn expires_at(&self) -> Option<i64> {
        self.0.get(CLAIM_EXPIRY).and_then(Value::as_i64)
    }

    /// Flattens every claim to its string representation: string claims
    /// verbatim, everything else (numbers, booleans) via display form.
    pub fn to_string_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }

    /// Number of claims in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no claims
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Access/refresh token pair returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
