// ABOUTME: Unified error handling for the AptEats engine
// ABOUTME: Defines error codes, the AppError type, and convenience constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! # Unified Error Handling
//!
//! Centralized error types for the engine. The taxonomy is deliberately small:
//! the only fallible operations are biometric input validation and
//! configuration validation. Filtering, shuffling, plan selection, and timer
//! transitions are total functions and never produce errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input is present but not usable (non-numeric, non-positive, zero duration)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A required biometric field was not filled in
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// Input is numeric but outside the range the formulas are validated for
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Engine configuration failed validation
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
}

/// Application error with a stable code and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Stable error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message suitable for display
    pub message: String,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A required field is missing from the biometric form
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Required field '{field}' is not filled in"),
        )
    }

    /// Value is out of the validated range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AppError::invalid_input("weight must be positive");
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.to_string(), "weight must be positive");
    }

    #[test]
    fn test_missing_field_message_names_field() {
        let error = AppError::missing_field("weight_kg");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert!(error.message.contains("weight_kg"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredField).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_FIELD\"");
    }
}
