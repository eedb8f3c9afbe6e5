// ABOUTME: Unified error handling with standard error codes for the recipe planner client
// ABOUTME: Defines AppError, ErrorCode, and the AppResult alias used by config, logging, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Adapter calls fail with the narrower [`ApiError`](crate::api::ApiError) so views
//! can tell "not found" from "network down". Everything above that layer
//! (configuration, logging setup, the binary) works in terms of [`AppError`].

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    /// The requested resource was not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// The recipe service answered with an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The recipe service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration is present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Payload could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "The recipe service encountered an error",
            Self::ExternalServiceUnavailable => "The recipe service is currently unavailable",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required configuration value is absent
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Configuration value is present but unusable
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        let code = match &error {
            ApiError::NotFound { .. } => ErrorCode::ResourceNotFound,
            ApiError::Validation { .. } => ErrorCode::InvalidInput,
            ApiError::Network { status: Some(_), .. } => ErrorCode::ExternalServiceError,
            ApiError::Network { status: None, .. } => ErrorCode::ExternalServiceUnavailable,
            ApiError::MalformedResponse(_) => ErrorCode::SerializationError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_conversion_keeps_category() {
        let error = AppError::from(ApiError::not_found("r9"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(error.message.contains("r9"));
        assert!(error.source().is_some());

        let error = AppError::from(ApiError::validation("name is required"));
        assert_eq!(error.code, ErrorCode::InvalidInput);

        let error = AppError::from(ApiError::transport("connection refused"));
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap_or_default();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::config_missing("RECIPE_API_URL is not set");
        assert_eq!(
            error.to_string(),
            "Required configuration is missing: RECIPE_API_URL is not set"
        );
    }
}
