//! Values stored in a program state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variable identifier.
pub type Ident = String;

/// A value bound to a variable: either an integer or a truth value.
///
/// Serialized externally tagged (`{"int": 5}`), which keeps the encoding
/// self-describing for both JSON and bincode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Int(i64),
    Bool(bool),
}

impl Value {
    /// Name of the value's domain, used in type mismatch diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Check whether `name` is a well-formed variable identifier.
///
/// Identifiers start with an ASCII letter or underscore, followed by
/// ASCII letters, digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_matches_domain() {
        assert_eq!(Value::Int(3).type_name(), "integer");
        assert_eq!(Value::Bool(false).type_name(), "boolean");
    }

    #[test]
    fn projections_only_match_their_domain() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Int(7).as_bool(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Bool(true).as_int(), None);
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Value::from(4_i64), Value::Int(4));
        assert_eq!(Value::from(4_i32), Value::Int(4));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn values_serialize_tagged_by_domain() {
        assert_eq!(serde_json::to_string(&Value::Int(-2)).unwrap(), r#"{"int":-2}"#);
        assert_eq!(
            serde_json::to_string(&Value::Bool(true)).unwrap(),
            r#"{"bool":true}"#
        );
        let v: Value = serde_json::from_str(r#"{"bool":false}"#).unwrap();
        assert_eq!(v, Value::Bool(false));
    }

    #[test]
    fn identifiers_are_validated() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("loopCounter"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("x y"));
    }
}
