// ABOUTME: Wire envelopes exchanged with the recipe service
// ABOUTME: Converts loosely shaped JSON bodies into typed recipes at the adapter boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;

use super::ApiError;
use crate::models::Recipe;

/// `GET recipes` body; the service may add a `count`, which is ignored
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// `POST recipes` body, either the recipe itself or wrapped with a message
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreatedRecipeResponse {
    Wrapped { recipe: Recipe },
    Bare(Recipe),
}

impl CreatedRecipeResponse {
    pub(crate) fn into_recipe(self) -> Recipe {
        match self {
            Self::Wrapped { recipe } | Self::Bare(recipe) => recipe,
        }
    }
}

/// Error body the service sends with 4xx/5xx answers
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: String,
}

/// Reject recipes the service returned without an identity
pub(crate) fn ensure_identified(recipe: Recipe) -> Result<Recipe, ApiError> {
    if recipe.recipe_id.trim().is_empty() {
        return Err(ApiError::MalformedResponse(format!(
            "recipe '{}' has no recipe_id",
            recipe.name
        )));
    }
    Ok(recipe)
}

/// Whether a success body means "nothing here"
pub(crate) fn is_absent_body(body: &[u8]) -> bool {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    text.is_empty() || text == "null"
}

/// Best human-readable reason from an error response body
pub(crate) fn service_error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ServiceErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}
