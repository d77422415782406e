// SPDX-License-Identifier: MIT

//! Construction of comparison and conjunction expressions
//!
//! [`compare`] is the only way to build a [`ComparisonExpression`]; it
//! rejects invalid operand combinations at graph-construction time so the
//! engine never sees them. `&` and `|` on already-built expressions are
//! sugar over [`ConjunctionExpression`] chaining.

use std::ops::{BitAnd, BitOr};

use crate::condition::ast::{
    BoolExpression, ComparisonExpression, ComparisonOp, ConjunctionExpression, Operand,
};
use crate::error::FlowError;
use crate::literal::{LiteralConverter, LiteralType};
use crate::node::NodeOutput;
use crate::promise::Promise;

/// One side of a comparison as supplied by authoring code: either a
/// promise or a plain native value still awaiting conversion
#[derive(Debug, Clone)]
pub enum CompareSide {
    Promise(Promise),
    Native(serde_json::Value),
}

impl From<Promise> for CompareSide {
    fn from(promise: Promise) -> Self {
        CompareSide::Promise(promise)
    }
}

impl From<serde_json::Value> for CompareSide {
    fn from(value: serde_json::Value) -> Self {
        CompareSide::Native(value)
    }
}

impl From<i32> for CompareSide {
    fn from(value: i32) -> Self {
        CompareSide::Native(value.into())
    }
}

impl From<i64> for CompareSide {
    fn from(value: i64) -> Self {
        CompareSide::Native(value.into())
    }
}

impl From<f64> for CompareSide {
    fn from(value: f64) -> Self {
        CompareSide::Native(value.into())
    }
}

impl From<&str> for CompareSide {
    fn from(value: &str) -> Self {
        CompareSide::Native(value.into())
    }
}

impl From<bool> for CompareSide {
    fn from(value: bool) -> Self {
        CompareSide::Native(value.into())
    }
}

/// Build a comparison between two operands, at least one of which must be
/// a pending promise.
///
/// Rules, applied in order:
/// - a promise operand that is already ready is rejected (the comparison
///   describes a condition for later evaluation, not an already-known fact);
/// - two promise operands must declare the same type;
/// - two plain values are rejected outright;
/// - a plain value is converted by `converter` to a literal of the type
///   declared by the promise side, and converter failures propagate
///   unchanged.
pub fn compare(
    converter: &dyn LiteralConverter,
    lhs: impl Into<CompareSide>,
    op: ComparisonOp,
    rhs: impl Into<CompareSide>,
) -> Result<ComparisonExpression, FlowError> {
    let lhs = lhs.into();
    let rhs = rhs.into();

    let lhs_ref = pending_reference(&lhs)?;
    let rhs_ref = pending_reference(&rhs)?;

    let target = match (lhs_ref, rhs_ref) {
        (Some(left), Some(right)) => {
            if left.declared_type != right.declared_type {
                return Err(FlowError::type_mismatch(&left.var, &right.var));
            }
            left.declared_type
        }
        (Some(left), None) => left.declared_type,
        (None, Some(right)) => right.declared_type,
        (None, None) => {
            return Err(FlowError::usage("at least one operand must be a promise"));
        }
    };

    let lhs = resolve(converter, lhs, target)?;
    let rhs = resolve(converter, rhs, target)?;
    Ok(ComparisonExpression::new(lhs, op, rhs))
}

/// Reference of a promise side, `None` for native values. A ready promise
/// is a usage error here.
fn pending_reference(side: &CompareSide) -> Result<Option<&NodeOutput>, FlowError> {
    match side {
        CompareSide::Promise(promise) => {
            if promise.is_ready() {
                return Err(FlowError::usage(format!(
                    "comparison of resolved promise '{}' is not allowed",
                    promise.var()
                )));
            }
            promise.reference().map(Some)
        }
        CompareSide::Native(_) => Ok(None),
    }
}

fn resolve(
    converter: &dyn LiteralConverter,
    side: CompareSide,
    target: LiteralType,
) -> Result<Operand, FlowError> {
    match side {
        CompareSide::Promise(promise) => Ok(Operand::Reference(promise.reference()?.clone())),
        CompareSide::Native(value) => Ok(Operand::Literal(converter.convert(&value, target)?)),
    }
}

impl<R: Into<BoolExpression>> BitAnd<R> for ComparisonExpression {
    type Output = ConjunctionExpression;

    fn bitand(self, rhs: R) -> ConjunctionExpression {
        self.and(rhs)
    }
}

impl<R: Into<BoolExpression>> BitOr<R> for ComparisonExpression {
    type Output = ConjunctionExpression;

    fn bitor(self, rhs: R) -> ConjunctionExpression {
        self.or(rhs)
    }
}

impl<R: Into<BoolExpression>> BitAnd<R> for ConjunctionExpression {
    type Output = ConjunctionExpression;

    fn bitand(self, rhs: R) -> ConjunctionExpression {
        self.and(rhs)
    }
}

impl<R: Into<BoolExpression>> BitOr<R> for ConjunctionExpression {
    type Output = ConjunctionExpression;

    fn bitor(self, rhs: R) -> ConjunctionExpression {
        self.or(rhs)
    }
}

impl<R: Into<BoolExpression>> BitAnd<R> for BoolExpression {
    type Output = ConjunctionExpression;

    fn bitand(self, rhs: R) -> ConjunctionExpression {
        self.and(rhs)
    }
}

impl<R: Into<BoolExpression>> BitOr<R> for BoolExpression {
    type Output = ConjunctionExpression;

    fn bitor(self, rhs: R) -> ConjunctionExpression {
        self.or(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ast::ConjunctionOp;
    use crate::literal::{JsonConverter, Literal};
    use serde_json::json;

    fn pending(var: &str, node_id: &str, ty: LiteralType) -> Promise {
        Promise::pending(var, NodeOutput::new(node_id, var, ty))
    }

    #[test]
    fn test_compare_promise_to_native() {
        let score = pending("score", "n0", LiteralType::Integer);
        let expr = compare(&JsonConverter, score, ComparisonOp::Gt, 5).unwrap();

        match expr.lhs() {
            Operand::Reference(reference) => {
                assert_eq!(reference.node_id, "n0");
                assert_eq!(reference.var, "score");
            }
            other => panic!("expected reference, got {other:?}"),
        }
        assert_eq!(expr.op(), ComparisonOp::Gt);
        assert_eq!(expr.rhs(), &Operand::Literal(Literal::Integer(5)));
    }

    #[test]
    fn test_compare_native_to_promise() {
        let status = pending("status", "n1", LiteralType::String);
        let expr = compare(&JsonConverter, "done", ComparisonOp::Eq, status).unwrap();

        assert_eq!(
            expr.lhs(),
            &Operand::Literal(Literal::String("done".to_string()))
        );
        assert!(matches!(expr.rhs(), Operand::Reference(_)));
    }

    #[test]
    fn test_compare_two_pending_promises() {
        let a = pending("a", "n0", LiteralType::Float);
        let b = pending("b", "n1", LiteralType::Float);
        let expr = compare(&JsonConverter, a, ComparisonOp::Lte, b).unwrap();

        match (expr.lhs(), expr.rhs()) {
            (Operand::Reference(left), Operand::Reference(right)) => {
                assert_eq!(left.node_id, "n0");
                assert_eq!(right.node_id, "n1");
            }
            other => panic!("expected two references, got {other:?}"),
        }
        assert_eq!(expr.op(), ComparisonOp::Lte);
    }

    #[test]
    fn test_compare_rejects_two_natives() {
        let err = compare(&JsonConverter, 1, ComparisonOp::Eq, 2).unwrap_err();
        assert!(matches!(err, FlowError::Usage(_)));
    }

    #[test]
    fn test_compare_rejects_resolved_promise() {
        let done = Promise::ready("done", Literal::Boolean(true));
        let err = compare(&JsonConverter, done, ComparisonOp::Eq, true).unwrap_err();
        assert!(matches!(err, FlowError::Usage(_)));
    }

    #[test]
    fn test_compare_rejects_type_mismatch() {
        let a = pending("a", "n0", LiteralType::Integer);
        let b = pending("b", "n1", LiteralType::String);
        let err = compare(&JsonConverter, a, ComparisonOp::Eq, b).unwrap_err();
        assert!(matches!(err, FlowError::TypeMismatch { .. }));
    }

    #[test]
    fn test_compare_propagates_conversion_failure() {
        let score = pending("score", "n0", LiteralType::Integer);
        let err = compare(&JsonConverter, score, ComparisonOp::Eq, json!({"k": 1})).unwrap_err();
        assert!(matches!(err, FlowError::Conversion(_)));
    }

    #[test]
    fn test_chaining_builds_left_leaning_tree() {
        let a = compare(
            &JsonConverter,
            pending("a", "n0", LiteralType::Integer),
            ComparisonOp::Gt,
            1,
        )
        .unwrap();
        let b = compare(
            &JsonConverter,
            pending("b", "n1", LiteralType::Integer),
            ComparisonOp::Lt,
            2,
        )
        .unwrap();
        let c = compare(
            &JsonConverter,
            pending("c", "n2", LiteralType::Integer),
            ComparisonOp::Eq,
            3,
        )
        .unwrap();

        let root = (a.clone() & b.clone()) | c.clone();

        assert_eq!(root.op(), ConjunctionOp::Or);
        match root.lhs() {
            BoolExpression::Conjunction(inner) => {
                assert_eq!(inner.op(), ConjunctionOp::And);
                assert_eq!(inner.lhs(), &BoolExpression::Comparison(a));
                assert_eq!(inner.rhs(), &BoolExpression::Comparison(b));
            }
            other => panic!("expected nested conjunction, got {other:?}"),
        }
        assert_eq!(root.rhs(), &BoolExpression::Comparison(c));
    }
}
