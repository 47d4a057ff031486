//! Token payload claims.
//!
//! A payload is an open map from string keys to arbitrary JSON values
//! with a reserved subset of well-known optional keys (`exp`, `nbf`,
//! `iat`, `sub`, `iss`, `aud`, `jti`). `Claims` wraps the map and adds
//! typed accessors for the reserved keys; everything else stays reachable
//! through [`Claims::get`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved claim key: expiration time (Unix seconds).
pub const EXP: &str = "exp";
/// Reserved claim key: not-before time (Unix seconds).
pub const NBF: &str = "nbf";
/// Reserved claim key: issued-at time (Unix seconds).
pub const IAT: &str = "iat";
/// Reserved claim key: subject.
pub const SUB: &str = "sub";
/// Reserved claim key: issuer.
pub const ISS: &str = "iss";
/// Reserved claim key: audience.
pub const AUD: &str = "aud";
/// Reserved claim key: token identifier.
pub const JTI: &str = "jti";

/// An open claim map with typed accessors for the registered keys.
///
/// Key order is preserved, so re-serializing produces the same byte
/// sequence the caller authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    map: Map<String, Value>,
}

impl Claims {
    /// Creates an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Inserts a claim, returning any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.map.insert(key.into(), value)
    }

    /// Number of claims present.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true when no claims are present.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    /// Expiration time, if present as a number.
    pub fn exp(&self) -> Option<i64> {
        self.numeric(EXP)
    }

    /// Not-before time, if present as a number.
    pub fn nbf(&self) -> Option<i64> {
        self.numeric(NBF)
    }

    /// Issued-at time, if present as a number.
    pub fn iat(&self) -> Option<i64> {
        self.numeric(IAT)
    }

    /// Subject, if present as a string.
    pub fn sub(&self) -> Option<&str> {
        self.string(SUB)
    }

    /// Issuer, if present as a string.
    pub fn iss(&self) -> Option<&str> {
        self.string(ISS)
    }

    /// Audience, if present as a string.
    pub fn aud(&self) -> Option<&str> {
        self.string(AUD)
    }

    /// Token identifier, if present as a string.
    pub fn jti(&self) -> Option<&str> {
        self.string(JTI)
    }

    /// Numeric claims may arrive as integers or floats; both are read as
    /// whole seconds.
    fn numeric(&self, key: &str) -> Option<i64> {
        let value = self.map.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl FromIterator<(String, Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
