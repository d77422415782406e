// SPDX-License-Identifier: MIT

//! Typed error handling for flowkit
//!
//! Every violation is a fail-fast construction failure: nothing in this
//! crate retries or recovers locally. The graph-authoring layer decides
//! whether to abort or report to the user.

use thiserror::Error;

/// Top-level error type for flowkit
#[derive(Debug, Error)]
pub enum FlowError {
    /// The expression API was misused in a way that indicates a logic
    /// error in graph-authoring code
    #[error("invalid expression: {0}")]
    Usage(String),

    /// Two pending promise operands declare incompatible types
    #[error("comparison between non comparable types {lhs} & {rhs}")]
    TypeMismatch { lhs: String, rhs: String },

    /// A promise accessor was called in the wrong readiness state
    #[error("invalid promise state: {0}")]
    State(String),

    /// A native value could not be converted to the engine's typed literal
    #[error("literal conversion failed: {0}")]
    Conversion(String),
}

impl FlowError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a type mismatch error from the two offending variable names
    pub fn type_mismatch(lhs: impl Into<String>, rhs: impl Into<String>) -> Self {
        Self::TypeMismatch {
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    /// Create a conversion error
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlowError::usage("at least one operand must be a promise");
        assert_eq!(
            err.to_string(),
            "invalid expression: at least one operand must be a promise"
        );

        let err = FlowError::type_mismatch("x", "y");
        assert_eq!(
            err.to_string(),
            "comparison between non comparable types x & y"
        );
    }
}
