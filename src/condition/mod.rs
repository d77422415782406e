// SPDX-License-Identifier: MIT

//! Deferred boolean conditions for branch selection
//!
//! This module builds expression trees like:
//! - `compare(&conv, score, ComparisonOp::Gt, 5)`
//! - `compare(..)? & compare(..)?`
//!
//! The trees describe conditions over values that do not exist yet; the
//! execution engine evaluates them once the producing nodes have run.

mod ast;
mod builder;

pub use ast::{
    BoolExpression, ComparisonExpression, ComparisonOp, ConjunctionExpression, ConjunctionOp,
    Operand,
};
pub use builder::{compare, CompareSide};
