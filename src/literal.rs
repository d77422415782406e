// SPDX-License-Identifier: MIT

//! The engine's typed literal representation
//!
//! Once a value is materialized it lives in this strongly-typed form.
//! Native values (arbitrary `serde_json::Value`s supplied by authoring
//! code) are converted into it through a [`LiteralConverter`].

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// Declared type of a value in the engine's type system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralType {
    Integer,
    Float,
    String,
    Boolean,
}

impl std::fmt::Display for LiteralType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralType::Integer => write!(f, "integer"),
            LiteralType::Float => write!(f, "float"),
            LiteralType::String => write!(f, "string"),
            LiteralType::Boolean => write!(f, "boolean"),
        }
    }
}

/// A materialized, typed value
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl Literal {
    /// The declared type of this literal
    pub fn literal_type(&self) -> LiteralType {
        match self {
            Literal::Integer(_) => LiteralType::Integer,
            Literal::Float(_) => LiteralType::Float,
            Literal::String(_) => LiteralType::String,
            Literal::Boolean(_) => LiteralType::Boolean,
        }
    }

    /// Short canonical form used in diagnostic rendering
    pub fn short_string(&self) -> String {
        match self {
            Literal::Integer(i) => i.to_string(),
            Literal::Float(v) => v.to_string(),
            Literal::String(s) => format!("'{s}'"),
            Literal::Boolean(b) => b.to_string(),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_string())
    }
}

/// Converts a native value into the engine's typed literal representation.
///
/// Implementations decide which native shapes are acceptable for each
/// target type; failures surface as [`FlowError::Conversion`] and are
/// propagated unchanged by expression construction.
pub trait LiteralConverter {
    fn convert(&self, value: &serde_json::Value, target: LiteralType) -> Result<Literal, FlowError>;
}

/// Default converter covering the four primitive literal types
#[derive(Debug, Default)]
pub struct JsonConverter;

impl LiteralConverter for JsonConverter {
    fn convert(&self, value: &serde_json::Value, target: LiteralType) -> Result<Literal, FlowError> {
        use serde_json::Value;

        match (value, target) {
            (Value::Number(n), LiteralType::Integer) => {
                n.as_i64().map(Literal::Integer).ok_or_else(|| {
                    FlowError::conversion(format!("{n} is out of range for an integer literal"))
                })
            }
            (Value::Number(n), LiteralType::Float) => {
                n.as_f64().map(Literal::Float).ok_or_else(|| {
                    FlowError::conversion(format!("{n} cannot be represented as a float literal"))
                })
            }
            (Value::String(s), LiteralType::String) => Ok(Literal::String(s.clone())),
            (Value::Bool(b), LiteralType::Boolean) => Ok(Literal::Boolean(*b)),
            (other, target) => Err(FlowError::conversion(format!(
                "cannot convert {other} to a {target} literal"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_type() {
        assert_eq!(Literal::Integer(3).literal_type(), LiteralType::Integer);
        assert_eq!(Literal::Float(0.5).literal_type(), LiteralType::Float);
        assert_eq!(
            Literal::String("a".to_string()).literal_type(),
            LiteralType::String
        );
        assert_eq!(Literal::Boolean(true).literal_type(), LiteralType::Boolean);
    }

    #[test]
    fn test_short_string() {
        assert_eq!(Literal::Integer(42).short_string(), "42");
        assert_eq!(Literal::String("hi".to_string()).short_string(), "'hi'");
        assert_eq!(Literal::Boolean(false).short_string(), "false");
    }

    #[test]
    fn test_json_converter_primitives() {
        let conv = JsonConverter;
        assert_eq!(
            conv.convert(&json!(7), LiteralType::Integer).unwrap(),
            Literal::Integer(7)
        );
        assert_eq!(
            conv.convert(&json!(2.5), LiteralType::Float).unwrap(),
            Literal::Float(2.5)
        );
        assert_eq!(
            conv.convert(&json!("x"), LiteralType::String).unwrap(),
            Literal::String("x".to_string())
        );
        assert_eq!(
            conv.convert(&json!(true), LiteralType::Boolean).unwrap(),
            Literal::Boolean(true)
        );
    }

    #[test]
    fn test_json_converter_rejects_mismatched_shape() {
        let conv = JsonConverter;
        let err = conv.convert(&json!("nope"), LiteralType::Integer).unwrap_err();
        assert!(matches!(err, FlowError::Conversion(_)));

        let err = conv.convert(&json!([1, 2]), LiteralType::String).unwrap_err();
        assert!(matches!(err, FlowError::Conversion(_)));
    }

    #[test]
    fn test_json_converter_float_rejected_as_integer() {
        let conv = JsonConverter;
        let err = conv.convert(&json!(1.5), LiteralType::Integer).unwrap_err();
        assert!(matches!(err, FlowError::Conversion(_)));
    }
}
