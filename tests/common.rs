// ABOUTME: Shared test utilities for recipe planner integration tests
// ABOUTME: Provides an in-memory recipe service, a failing service, and recipe fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_planner`

use std::sync::Mutex;

use async_trait::async_trait;
use recipe_planner::api::{ApiError, RecipeApi};
use recipe_planner::models::{Recipe, RecipeDraft};

/// Build a recipe fixture
pub fn recipe(recipe_id: &str, name: &str) -> Recipe {
    RecipeDraft::new(
        name,
        vec!["dashi".to_owned(), "miso".to_owned()],
        "Simmer.\nServe hot.",
    )
    .into_recipe(recipe_id)
}

/// Recipe service kept in memory, assigning ids `r1`, `r2`, ...
#[derive(Debug, Default)]
pub struct InMemoryRecipeService {
    recipes: Mutex<Vec<Recipe>>,
    next_id: Mutex<u32>,
}

impl InMemoryRecipeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Mutex::new(recipes),
            next_id: Mutex::new(0),
        }
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.lock().unwrap().len()
    }
}

#[async_trait]
impl RecipeApi for InMemoryRecipeService {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ApiError> {
        self.recipes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.recipe_id == recipe_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(recipe_id))
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("r{next}")
        };
        let stored = draft.clone().into_recipe(id);
        self.recipes.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

/// Service whose every call fails with the same error
#[derive(Debug, Clone)]
pub struct FailingRecipeService {
    pub error: ApiError,
}

impl FailingRecipeService {
    pub fn network() -> Self {
        Self {
            error: ApiError::transport("connection refused"),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            error: ApiError::validation(message),
        }
    }
}

#[async_trait]
impl RecipeApi for FailingRecipeService {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        Err(self.error.clone())
    }

    async fn get_recipe(&self, _recipe_id: &str) -> Result<Recipe, ApiError> {
        Err(self.error.clone())
    }

    async fn create_recipe(&self, _draft: &RecipeDraft) -> Result<Recipe, ApiError> {
        Err(self.error.clone())
    }
}
