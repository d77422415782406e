// SPDX-License-Identifier: MIT

//! flowkit: deferred values and boolean expression trees for authoring
//! computation graphs.
//!
//! When a graph is being authored, a node's outputs do not exist yet. A
//! [`Promise`] stands in for such a value: it is either already
//! materialized as a typed [`Literal`], or it references the output
//! variable of a node that has not run. Promises combine into
//! [`condition`] expression trees that an external execution engine
//! evaluates later, typically to pick a branch of a conditional.
//!
//! All invariants are enforced here, at construction time: comparing two
//! plain literals, comparing an already-resolved promise, or mixing
//! declared types fails immediately instead of producing a malformed
//! graph.

pub mod condition;
pub mod error;
pub mod literal;
pub mod node;
pub mod packaging;
pub mod promise;

pub use condition::{
    compare, BoolExpression, ComparisonExpression, ComparisonOp, ConjunctionExpression,
    ConjunctionOp,
};
pub use error::FlowError;
pub use literal::{JsonConverter, Literal, LiteralConverter, LiteralType};
pub use node::NodeOutput;
pub use promise::{create_task_output, OutputBundle, Promise, TaskOutputs};
