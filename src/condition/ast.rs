// SPDX-License-Identifier: MIT

//! Expression tree for branch conditions
//!
//! Expressions describe a condition over not-yet-produced values; nothing
//! here evaluates anything. The finished tree is handed to the execution
//! engine, which evaluates it against actual runtime values.

use serde::{Deserialize, Serialize};

use crate::literal::Literal;
use crate::node::NodeOutput;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ComparisonOp {
    /// =
    Eq,
    /// !=
    Ne,
    /// >
    Gt,
    /// >=
    Gte,
    /// <
    Lt,
    /// <=
    Lte,
}

impl std::fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonOp::Eq => write!(f, "="),
            ComparisonOp::Ne => write!(f, "!="),
            ComparisonOp::Gt => write!(f, ">"),
            ComparisonOp::Gte => write!(f, ">="),
            ComparisonOp::Lt => write!(f, "<"),
            ComparisonOp::Lte => write!(f, "<="),
        }
    }
}

/// Logical operators joining two expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ConjunctionOp {
    And,
    Or,
}

impl std::fmt::Display for ConjunctionOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConjunctionOp::And => write!(f, "and"),
            ConjunctionOp::Or => write!(f, "or"),
        }
    }
}

/// A comparison operand after construction: either a reference into the
/// graph or a materialized literal, never a raw promise
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Operand {
    Reference(NodeOutput),
    Literal(Literal),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Reference(reference) => write!(f, "{reference}"),
            Operand::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// `lhs op rhs`, with both sides already resolved.
///
/// Built through [`compare`](crate::condition::compare), which enforces
/// that at least one side is a pending promise and that two promise sides
/// agree on their declared type. Immutable once built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComparisonExpression {
    lhs: Operand,
    op: ComparisonOp,
    rhs: Operand,
}

impl ComparisonExpression {
    pub(crate) fn new(lhs: Operand, op: ComparisonOp, rhs: Operand) -> Self {
        Self { lhs, op, rhs }
    }

    pub fn lhs(&self) -> &Operand {
        &self.lhs
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    pub fn rhs(&self) -> &Operand {
        &self.rhs
    }

    /// Combine with another expression under logical AND
    pub fn and(self, rhs: impl Into<BoolExpression>) -> ConjunctionExpression {
        ConjunctionExpression::new(self, ConjunctionOp::And, rhs)
    }

    /// Combine with another expression under logical OR
    pub fn or(self, rhs: impl Into<BoolExpression>) -> ConjunctionExpression {
        ConjunctionExpression::new(self, ConjunctionOp::Or, rhs)
    }
}

impl std::fmt::Display for ComparisonExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Comp( {} {} {} )", self.lhs, self.op, self.rhs)
    }
}

/// Either side of a conjunction: a comparison leaf or a nested conjunction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum BoolExpression {
    Comparison(ComparisonExpression),
    Conjunction(Box<ConjunctionExpression>),
}

impl BoolExpression {
    pub fn and(self, rhs: impl Into<BoolExpression>) -> ConjunctionExpression {
        ConjunctionExpression::new(self, ConjunctionOp::And, rhs)
    }

    pub fn or(self, rhs: impl Into<BoolExpression>) -> ConjunctionExpression {
        ConjunctionExpression::new(self, ConjunctionOp::Or, rhs)
    }
}

impl From<ComparisonExpression> for BoolExpression {
    fn from(expr: ComparisonExpression) -> Self {
        BoolExpression::Comparison(expr)
    }
}

impl From<ConjunctionExpression> for BoolExpression {
    fn from(expr: ConjunctionExpression) -> Self {
        BoolExpression::Conjunction(Box::new(expr))
    }
}

impl std::fmt::Display for BoolExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoolExpression::Comparison(expr) => write!(f, "{expr}"),
            BoolExpression::Conjunction(expr) => write!(f, "{expr}"),
        }
    }
}

/// A binary tree node joining two expressions with AND/OR.
///
/// Chaining puts the existing expression on the left, so chains read in
/// left-to-right order. No validation is needed here: comparisons are
/// already valid by construction, and each new node only references
/// previously built ones, so cycles cannot form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConjunctionExpression {
    lhs: BoolExpression,
    op: ConjunctionOp,
    rhs: BoolExpression,
}

impl ConjunctionExpression {
    pub fn new(
        lhs: impl Into<BoolExpression>,
        op: ConjunctionOp,
        rhs: impl Into<BoolExpression>,
    ) -> Self {
        Self {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }

    pub fn lhs(&self) -> &BoolExpression {
        &self.lhs
    }

    pub fn op(&self) -> ConjunctionOp {
        self.op
    }

    pub fn rhs(&self) -> &BoolExpression {
        &self.rhs
    }

    pub fn and(self, rhs: impl Into<BoolExpression>) -> ConjunctionExpression {
        ConjunctionExpression::new(self, ConjunctionOp::And, rhs)
    }

    pub fn or(self, rhs: impl Into<BoolExpression>) -> ConjunctionExpression {
        ConjunctionExpression::new(self, ConjunctionOp::Or, rhs)
    }
}

impl std::fmt::Display for ConjunctionExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "( {} {} {} )", self.lhs, self.op, self.rhs)
    }
}
