//! Large unsigned integers carried on the wire
//!
//! Balances, logical times and function IDs can exceed the signed 64-bit range,
//! so the core exchanges them as strings. `LargeUint` accepts a JSON number, a
//! decimal string or a `0x`-prefixed hex string and always writes a decimal
//! string. `FunctionId` wraps the same value but writes `0x`-prefixed hex.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Failure to parse a `LargeUint` from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid unsigned integer '{input}': {reason}")]
pub struct ParseLargeUintError {
    pub input: String,
    pub reason: String,
}

/// Unsigned integer up to 256 bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LargeUint(U256);

impl LargeUint {
    pub const ZERO: Self = Self(U256::ZERO);

    /// Parse a decimal or `0x`-prefixed hex string
    pub fn parse(input: &str) -> Result<Self, ParseLargeUintError> {
        let trimmed = input.trim();
        let fail = |reason: String| ParseLargeUintError {
            input: input.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(fail("empty string".to_string()));
        }

        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(digits) if digits.is_empty() => return Err(fail("no hex digits".to_string())),
            Some(digits) => U256::from_str_radix(digits, 16),
            None => U256::from_str_radix(trimmed, 10),
        };

        parsed.map(Self).map_err(|e| fail(e.to_string()))
    }

    /// Decimal representation used on the wire
    pub fn to_decimal(&self) -> String {
        self.0.to_string()
    }

    /// Lowercase hex representation with `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// Narrow to `u64` when the value fits
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }
}

impl From<u64> for LargeUint {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for LargeUint {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for LargeUint {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl FromStr for LargeUint {
    type Err = ParseLargeUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LargeUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for LargeUint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for LargeUint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LargeUintVisitor)
    }
}

struct LargeUintVisitor;

impl<'de> Visitor<'de> for LargeUintVisitor {
    type Value = LargeUint;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an unsigned integer, a decimal string or a 0x-prefixed hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(LargeUint::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(LargeUint::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(LargeUint::from)
            .map_err(|_| E::custom(format!("negative value {} is not allowed", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        LargeUint::parse(v).map_err(E::custom)
    }

    // JSON numbers past u64 arrive as floats and have already lost precision
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::custom(format!(
            "number {} does not fit in 64 bits, send it as a decimal or hex string",
            v
        )))
    }
}

/// Function or event identifier
///
/// Same range as `LargeUint`, written as `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(pub LargeUint);

impl FunctionId {
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<u32> for FunctionId {
    fn from(value: u32) -> Self {
        Self(LargeUint::from(u64::from(value)))
    }
}

impl FromStr for FunctionId {
    type Err = ParseLargeUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LargeUint::parse(s).map(Self)
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for FunctionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FunctionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        LargeUint::deserialize(deserializer).map(Self)
    }
}
