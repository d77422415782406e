// SPDX-License-Identifier: MIT

//! Deferred values bound to node outputs
//!
//! A [`Promise`] is the value of a declared output of a unit of work. It
//! is either already materialized as a typed [`Literal`], or it points at
//! the output variable of a node that has not run yet. Which of the two it
//! is gets fixed at construction and never changes in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::literal::Literal;
use crate::node::NodeOutput;

/// What a promise is bound to
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum Binding {
    /// Materialized value, known at authoring time
    Ready(Literal),
    /// Output of a node that has not run yet
    Pending(NodeOutput),
}

/// A named, possibly deferred value
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Promise {
    var: String,
    binding: Binding,
}

impl Promise {
    /// Bind `var` to an already materialized literal
    pub fn ready(var: impl Into<String>, val: Literal) -> Self {
        Self {
            var: var.into(),
            binding: Binding::Ready(val),
        }
    }

    /// Bind `var` to the output of a node that has not run yet
    pub fn pending(var: impl Into<String>, reference: NodeOutput) -> Self {
        Self {
            var: var.into(),
            binding: Binding::Pending(reference),
        }
    }

    /// Name of the variable bound with this promise
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Whether the value is materialized (as opposed to a node reference)
    pub fn is_ready(&self) -> bool {
        matches!(self.binding, Binding::Ready(_))
    }

    /// The materialized value. Only valid when the promise is ready.
    pub fn val(&self) -> Result<&Literal, FlowError> {
        match &self.binding {
            Binding::Ready(val) => Ok(val),
            Binding::Pending(_) => Err(FlowError::state(format!(
                "accessed value of unresolved promise '{}'",
                self.var
            ))),
        }
    }

    /// The origin node output. Only valid when the promise is pending.
    pub fn reference(&self) -> Result<&NodeOutput, FlowError> {
        match &self.binding {
            Binding::Ready(_) => Err(FlowError::state(format!(
                "accessed reference of resolved promise '{}'",
                self.var
            ))),
            Binding::Pending(reference) => Ok(reference),
        }
    }

    /// Forward configuration overrides to the producing node.
    ///
    /// Currently inert: a ready promise has no node to forward to, and for
    /// a pending promise the forwarding path is disabled, so this only
    /// logs and returns the promise unchanged.
    pub fn with_overrides(self, overrides: &HashMap<String, serde_json::Value>) -> Self {
        if let Binding::Pending(reference) = &self.binding {
            log::debug!(
                "overrides ({} entries) for promise '{}' not forwarded to node {}",
                overrides.len(),
                self.var,
                reference.node_id
            );
        }
        self
    }
}

impl std::fmt::Display for Promise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.binding {
            Binding::Ready(val) => write!(f, "Var({}={})", self.var, val),
            Binding::Pending(reference) => {
                write!(f, "Promise({},{})", self.var, reference.node_id)
            }
        }
    }
}

/// Outputs of a unit of work, as returned to the graph builder
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum TaskOutputs {
    /// A single output promise, returned as-is
    Single(Promise),
    /// Two or more named output promises in declaration order
    Bundle(OutputBundle),
}

impl TaskOutputs {
    /// Forward overrides; see [`Promise::with_overrides`] and
    /// [`OutputBundle::with_overrides`] for the exact behavior.
    pub fn with_overrides(self, overrides: &HashMap<String, serde_json::Value>) -> Self {
        match self {
            TaskOutputs::Single(promise) => TaskOutputs::Single(promise.with_overrides(overrides)),
            TaskOutputs::Bundle(bundle) => TaskOutputs::Bundle(bundle.with_overrides(overrides)),
        }
    }
}

/// A fixed-order aggregate of named promises.
///
/// Field names are each promise's `var`; uniqueness of names is the
/// producing task's contract and is not re-validated here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputBundle {
    fields: Vec<Promise>,
}

impl OutputBundle {
    /// Look up a field by its variable name
    pub fn get(&self, name: &str) -> Option<&Promise> {
        self.fields.iter().find(|p| p.var() == name)
    }

    /// Field names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|p| p.var()).collect()
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Promise> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Forward overrides to the first field only.
    ///
    /// This mirrors the observed behavior of the system being modeled; it
    /// is not a broadcast over all fields.
    pub fn with_overrides(mut self, overrides: &HashMap<String, serde_json::Value>) -> Self {
        if !self.fields.is_empty() {
            let first = self.fields.remove(0).with_overrides(overrides);
            self.fields.insert(0, first);
        }
        self
    }
}

/// Bundle the promises produced by a unit of work into its return shape.
///
/// No promises produce no output; a single promise is returned directly
/// rather than wrapped; two or more become an [`OutputBundle`] keyed by
/// each promise's `var`, in input order.
pub fn create_task_output(mut promises: Vec<Promise>) -> Option<TaskOutputs> {
    match promises.len() {
        0 => None,
        1 => Some(TaskOutputs::Single(promises.remove(0))),
        _ => Some(TaskOutputs::Bundle(OutputBundle { fields: promises })),
    }
}
