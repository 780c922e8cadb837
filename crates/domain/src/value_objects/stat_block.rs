//! StatBlock and StatValue - raw character/creature attributes
//!
//! A StatBlock is a free-form key/value bag whose keys only mean something
//! relative to a ruleset schema. Values are numbers or text, mirroring what a
//! sheet form can hold.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single raw attribute value.
///
/// Untagged so `12`, `12.0` and `"12"` all deserialize naturally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// Numeric coercion used by every resolver.
    ///
    /// Integers pass through, floats only when they have no fractional part,
    /// and text only when the trimmed string parses as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StatValue::Int(v) => Some(*v),
            StatValue::Float(v) => {
                if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            StatValue::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }

    /// Integer coercion narrowed to `i32`; out-of-range values count as non-integer.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_integer().and_then(|v| i32::try_from(v).ok())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i32> for StatValue {
    fn from(value: i32) -> Self {
        StatValue::Int(value as i64)
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Int(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

/// Raw attributes of one character or creature, keyed by schema field key.
///
/// Ordered so serialized blocks and derived results are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatBlock {
    values: BTreeMap<String, StatValue>,
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stat(mut self, key: impl Into<String>, value: impl Into<StatValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StatValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StatValue> {
        self.values.get(key)
    }

    /// Integer view of a stat; `None` when missing or not an integer.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.values.get(key).and_then(StatValue::as_i32)
    }

    /// Integer view with a fallback for missing or non-numeric values.
    pub fn int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StatBlock
where
    K: Into<String>,
    V: Into<StatValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
