// ABOUTME: Error types for the recommendation engine's caller-facing validation surface
// ABOUTME: Defines EngineError and the EngineResult alias used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BumpBite Nutrition

use thiserror::Error;

/// Errors surfaced by the engine's opt-in validation helpers
///
/// The scoring and ranking operations themselves are total functions and
/// never fail; malformed input is normalized (missing macros become zero,
/// unknown meal numbers resolve to the wind-down slot). This type only
/// appears when a caller explicitly asks for shape validation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller supplied a value that violates the input contract
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the violated constraint
        message: String,
    },
}

impl EngineError {
    /// Create an invalid-input error with the given message
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Convenience result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_formatting() {
        let err = EngineError::invalid_input("recipe id must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid input: recipe id must not be empty"
        );
    }
}
