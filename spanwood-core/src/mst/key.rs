//! Canonical keys for unordered vertex pairs.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical key of an unordered endpoint pair: the lexicographically smaller
/// label, a `-`, then the larger label.
///
/// `EdgeKey::new(u, v) == EdgeKey::new(v, u)` for every pair of labels.
///
/// # Examples
/// ```
/// use spanwood_core::EdgeKey;
///
/// assert_eq!(EdgeKey::new("C", "A").as_str(), "A-C");
/// assert_eq!(EdgeKey::new("C", "A"), EdgeKey::new("A", "C"));
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EdgeKey(String);

impl EdgeKey {
    /// Builds the key for the pair `{u, v}`.
    #[must_use]
    pub fn new(u: &str, v: &str) -> Self {
        let (low, high) = if u <= v { (u, v) } else { (v, u) };
        let mut key = String::with_capacity(low.len() + high.len() + 1);
        key.push_str(low);
        key.push('-');
        key.push_str(high);
        Self(key)
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EdgeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EdgeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
