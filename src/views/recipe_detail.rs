// ABOUTME: Recipe detail view fetching one recipe by id
// ABOUTME: Distinguishes "Recipe not found." from generic fetch failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, warn};

use super::{FetchPhase, FetchTicket, ViewScope};
use crate::api::{ApiError, RecipeApi};
use crate::constants::messages;
use crate::models::Recipe;

/// Detail page for a single recipe
#[derive(Debug)]
pub struct RecipeDetailView {
    recipe_id: String,
    phase: FetchPhase<Recipe>,
    scope: ViewScope,
}

impl RecipeDetailView {
    /// New view for `recipe_id`, in the Loading phase
    #[must_use]
    pub fn new(recipe_id: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            phase: FetchPhase::Loading,
            scope: ViewScope::new(),
        }
    }

    /// Id this view shows
    #[must_use]
    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    /// Handle for disposing this view from outside
    #[must_use]
    pub fn scope(&self) -> ViewScope {
        self.scope.clone()
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> &FetchPhase<Recipe> {
        &self.phase
    }

    /// Enter Loading for a new fetch
    pub fn begin(&mut self) -> FetchTicket {
        self.phase = FetchPhase::Loading;
        self.scope.begin()
    }

    /// Apply a settled fetch; returns `false` if the result was stale and dropped
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Recipe, ApiError>) -> bool {
        if !self.scope.accepts(ticket) {
            debug!(recipe.id = %self.recipe_id, "Discarding stale recipe response");
            return false;
        }
        self.phase = match result {
            Ok(recipe) => FetchPhase::Loaded(recipe),
            Err(e) if e.is_not_found() => {
                FetchPhase::Failed(messages::RECIPE_NOT_FOUND.to_owned())
            }
            Err(e) => {
                warn!(recipe.id = %self.recipe_id, error = %e, "Failed to fetch recipe");
                FetchPhase::Failed(messages::FETCH_RECIPE_FAILED.to_owned())
            }
        };
        true
    }

    /// Activate: fetch the recipe and apply it unless the view went away meanwhile
    pub async fn load<A: RecipeApi + ?Sized>(&mut self, api: &A) -> bool {
        let ticket = self.begin();
        let result = api.get_recipe(&self.recipe_id).await;
        self.settle(ticket, result)
    }

    /// Tear the view down
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    /// Text rendering; instructions are printed verbatim
    #[must_use]
    pub fn render(&self) -> String {
        match &self.phase {
            FetchPhase::Loading => messages::LOADING.to_owned(),
            FetchPhase::Failed(message) => message.clone(),
            FetchPhase::Loaded(recipe) => {
                let ingredients: Vec<String> = recipe
                    .ingredients
                    .iter()
                    .map(|ingredient| format!("- {ingredient}"))
                    .collect();
                format!(
                    "{}\n\nIngredients\n{}\n\nInstructions\n{}",
                    recipe.name,
                    ingredients.join("\n"),
                    recipe.instructions
                )
            }
        }
    }
}
