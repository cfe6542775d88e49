//! Token identifiers.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigUint, ParseBigIntError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A token identifier: a non-negative integer of arbitrary precision.
///
/// ERC-721 ids are 256-bit values that overflow every primitive integer
/// type, and the marketplace exchanges them as decimal strings. `Display`
/// renders plain base-10 with no sign, no leading zeros and no exponent,
/// which is the form used in request paths and query strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenId(BigUint);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        TokenId(BigUint::from(id))
    }
}

impl From<u128> for TokenId {
    fn from(id: u128) -> Self {
        TokenId(BigUint::from(id))
    }
}

impl From<BigUint> for TokenId {
    fn from(id: BigUint) -> Self {
        TokenId(id)
    }
}

impl FromStr for TokenId {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TokenId(BigUint::from_str(s)?))
    }
}

impl Serialize for TokenId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
