//! Error types for the tasklane-protocol crate.
//!
//! This module defines the errors raised by the reorder engine.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// An index was outside the bounds accepted by a list operation.
    ///
    /// Indices come from a trusted drag source, so this indicates an
    /// integration bug rather than bad user input.
    #[error("invalid {role} index {index} for list of length {len}")]
    InvalidIndex {
        /// Which index was rejected (`"start"`, `"end"`, `"source"`, `"destination"`).
        role: &'static str,
        /// The rejected index.
        index: usize,
        /// The length of the list the index was checked against.
        len: usize,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::InvalidIndex {
            role: "start",
            index: 4,
            len: 2,
        };
        assert_eq!(err.to_string(), "invalid start index 4 for list of length 2");
    }
}
