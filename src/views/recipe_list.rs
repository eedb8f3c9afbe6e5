// ABOUTME: Recipe list view fetching the full collection once per activation
// ABOUTME: Renders names, ingredient summaries, and detail links as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use tracing::{debug, warn};

use super::{FetchPhase, FetchTicket, Route, ViewScope};
use crate::api::{ApiError, RecipeApi};
use crate::constants::{messages, titles};
use crate::models::Recipe;

/// List of every recipe
#[derive(Debug, Default)]
pub struct RecipeListView {
    phase: FetchPhase<Vec<Recipe>>,
    scope: ViewScope,
}

impl RecipeListView {
    /// New view in the Loading phase
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for disposing this view from outside
    #[must_use]
    pub fn scope(&self) -> ViewScope {
        self.scope.clone()
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> &FetchPhase<Vec<Recipe>> {
        &self.phase
    }

    /// Enter Loading for a new fetch
    pub fn begin(&mut self) -> FetchTicket {
        self.phase = FetchPhase::Loading;
        self.scope.begin()
    }

    /// Apply a settled fetch; returns `false` if the result was stale and dropped
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<Recipe>, ApiError>) -> bool {
        if !self.scope.accepts(ticket) {
            debug!("Discarding stale recipe list response");
            return false;
        }
        self.phase = match result {
            Ok(recipes) => FetchPhase::Loaded(recipes),
            Err(e) => {
                warn!(error = %e, "Failed to fetch recipes");
                FetchPhase::Failed(messages::FETCH_RECIPES_FAILED.to_owned())
            }
        };
        true
    }

    /// Activate: fetch the list and apply it unless the view went away meanwhile
    pub async fn load<A: RecipeApi + ?Sized>(&mut self, api: &A) -> bool {
        let ticket = self.begin();
        let result = api.list_recipes().await;
        self.settle(ticket, result)
    }

    /// Tear the view down
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    /// Text rendering of the current phase
    #[must_use]
    pub fn render(&self) -> String {
        match &self.phase {
            FetchPhase::Loading => messages::LOADING.to_owned(),
            FetchPhase::Failed(message) => message.clone(),
            FetchPhase::Loaded(recipes) => {
                let mut out = String::from(titles::RECIPES);
                for recipe in recipes {
                    let _ = write!(
                        out,
                        "\n- {}  ({})\n  Ingredients: {}",
                        recipe.name,
                        Route::recipe(recipe.recipe_id.as_str()),
                        recipe.ingredients_summary()
                    );
                }
                out
            }
        }
    }
}
