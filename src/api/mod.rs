// ABOUTME: Recipe service adapter contract and its HTTP implementation
// ABOUTME: Three operations (list, get, create) returning typed recipes or an ApiError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Service Adapter
//!
//! Views depend on the [`RecipeApi`] trait rather than on HTTP, so the same
//! view logic runs against [`HttpRecipeClient`] or an in-memory service in tests.
//!
//! The adapter is stateless: each call is independent and safe to issue from
//! several views at once. Reads may be repeated freely; creation is never
//! retried by the adapter.

mod client;
mod error;
mod wire;

pub use client::HttpRecipeClient;
pub use error::ApiError;

use async_trait::async_trait;

use crate::models::{Recipe, RecipeDraft};

/// Operations offered by the remote recipe service
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch every recipe in service order
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure or a non-success
    /// status, and [`ApiError::MalformedResponse`] for an undecodable body.
    /// No partial results are returned.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;

    /// Fetch one recipe by id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the id does not exist and
    /// [`ApiError::Network`] for any other failure.
    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ApiError>;

    /// Submit a draft and return the stored recipe with its new id
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the service rejects the payload
    /// and [`ApiError::Network`] for any other failure.
    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError>;
}
