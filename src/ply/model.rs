//! Decoded payload representation.
//!
//! The body of an ascii PLY document decodes into a [`Model`]: element name to
//! instances, each instance a map from property name to [`Value`]. Values stay
//! exactly as they appear in the file. The header declares `float`, `int` and
//! friends, but interpreting those declarations is left to downstream
//! consumers; this crate hands tokens through verbatim.

use serde::{Deserialize, Serialize};
use super::KeyMap;

/// A single decoded property value.
///
/// Tokens are kept as text. A list keeps its entries in file order, without
/// the leading length token (the length is implied by `len()` and re-emitted
/// on write).
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single token, e.g. `6.28` or `-7`.
    Scalar(String),
    /// The entries of a list property, e.g. `["0", "1", "2"]` for `3 0 1 2`.
    List(Vec<String>),
}

impl Value {
    /// Returns the token of a scalar value, or `None` for a list.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(token) => Some(token),
            Value::List(_) => None,
        }
    }

    /// Returns the entries of a list value, or `None` for a scalar.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(entries) => Some(entries),
        }
    }
}

impl From<&str> for Value {
    fn from(token: &str) -> Self {
        Value::Scalar(token.to_string())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(entries: [&str; N]) -> Self {
        Value::List(entries.iter().map(|e| e.to_string()).collect())
    }
}

/// One decoded element instance: property name to value, in declaration order.
pub type Instance = KeyMap<Value>;

/// The decoded body of a document: element name to instances, in body order.
///
/// After a successful read every schema element has exactly `count` instances
/// here, in the order their lines appeared.
pub type Model = KeyMap<Vec<Instance>>;
