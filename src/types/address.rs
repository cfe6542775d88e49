//! Account and contract address strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An account or contract address in `0x`-prefixed hex form.
///
/// The marketplace accepts lowercase and checksummed spellings alike, so
/// the wrapped string is kept and rendered exactly as supplied, with no
/// validation or case normalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Address(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Address(address.to_string())
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Address(address)
    }
}
