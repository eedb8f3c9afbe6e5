// ABOUTME: Failure taxonomy for recipe service calls
// ABOUTME: Separates not-found and validation rejections from transport failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe service call errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or non-success status from the service
    #[error("Network error: {message}")]
    Network {
        /// HTTP status when the service answered, `None` when it was never reached
        status: Option<u16>,
        /// Failure detail
        message: String,
    },

    /// The requested recipe does not exist
    #[error("Recipe not found: {recipe_id}")]
    NotFound {
        /// Id that was requested
        recipe_id: String,
    },

    /// The service rejected a create payload
    #[error("Validation failed: {message}")]
    Validation {
        /// Reason given by the service
        message: String,
    },

    /// The service answered with a body that is not a valid recipe payload
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Failure before any HTTP status was received
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Non-success status that has no more specific meaning
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Recipe id does not exist
    #[must_use]
    pub fn not_found(recipe_id: impl Into<String>) -> Self {
        Self::NotFound {
            recipe_id: recipe_id.into(),
        }
    }

    /// Create payload rejected
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this is the not-found case
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::MalformedResponse(error.to_string());
        }
        Self::Network {
            status: error.status().map(|status| status.as_u16()),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}
