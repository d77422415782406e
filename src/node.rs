// SPDX-License-Identifier: MIT

//! References into the computation graph

use serde::{Deserialize, Serialize};

use crate::literal::LiteralType;

/// A reference to one output variable of one node in the graph.
///
/// This is a non-owning handle: expression construction only reads the
/// declared type and renders the identifiers for diagnostics, it never
/// dereferences the value (the producing node has not run yet).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeOutput {
    /// Identifier of the producing node
    pub node_id: String,
    /// Name of the output variable on that node
    pub var: String,
    /// Declared type of the variable in the engine's type system
    pub declared_type: LiteralType,
}

impl NodeOutput {
    pub fn new(
        node_id: impl Into<String>,
        var: impl Into<String>,
        declared_type: LiteralType,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            var: var.into(),
            declared_type,
        }
    }
}

impl std::fmt::Display for NodeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.node_id, self.var)
    }
}
