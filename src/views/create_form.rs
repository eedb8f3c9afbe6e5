// ABOUTME: Recipe creation form collecting draft fields and submitting them once
// ABOUTME: Splits comma-separated ingredients and keeps entered values on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use tracing::{debug, info, warn};

use super::{FetchTicket, Route, ViewScope};
use crate::api::{ApiError, RecipeApi};
use crate::constants::{messages, titles};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{Recipe, RecipeDraft};

/// Split a comma-separated ingredient field into trimmed, non-empty entries
///
/// `"egg, flour ,  milk"` becomes `["egg", "flour", "milk"]`; stray commas do
/// not produce empty entries.
#[must_use]
pub fn split_ingredients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Recipe stored; the form navigates to `next`
    Created {
        /// Stored recipe with its new id
        recipe: Recipe,
        /// Where to go next
        next: Route,
    },
    /// Service call failed; values are kept and the message is shown
    Failed(String),
    /// Not sent: a required field is blank or a submission is already running
    NotSubmitted,
    /// Result arrived after the form was disposed and was dropped
    Discarded,
}

/// The "create a new recipe" form
#[derive(Debug, Default)]
pub struct CreateRecipeForm {
    name: String,
    ingredients: String,
    instructions: String,
    error: Option<String>,
    submitting: Option<FetchTicket>,
    scope: ViewScope,
}

impl CreateRecipeForm {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the name field
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    /// Update the comma-separated ingredients field
    pub fn set_ingredients(&mut self, value: impl Into<String>) {
        self.ingredients = value.into();
    }

    /// Update the instructions field
    pub fn set_instructions(&mut self, value: impl Into<String>) {
        self.instructions = value.into();
    }

    /// Name as entered
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients as entered
    #[must_use]
    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    /// Instructions as entered
    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Message currently displayed under the fields
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a submission is in flight
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Handle for disposing this view from outside
    #[must_use]
    pub fn scope(&self) -> ViewScope {
        self.scope.clone()
    }

    /// Build the draft, rejecting blank required fields
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` naming the first blank field
    pub fn draft(&self) -> AppResult<RecipeDraft> {
        let ingredients = split_ingredients(&self.ingredients);
        let missing = if self.name.trim().is_empty() {
            Some("Recipe Name")
        } else if ingredients.is_empty() {
            Some("Ingredients")
        } else if self.instructions.trim().is_empty() {
            Some("Instructions")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                format!("{field} is required."),
            ));
        }
        Ok(RecipeDraft::new(
            self.name.clone(),
            ingredients,
            self.instructions.clone(),
        ))
    }

    /// Start a submission; `None` when blocked (message set) or already running
    pub fn begin_submit(&mut self) -> Option<(FetchTicket, RecipeDraft)> {
        if self.submitting.is_some() {
            debug!("Ignoring submit while a submission is in flight");
            return None;
        }
        match self.draft() {
            Ok(draft) => {
                let ticket = self.scope.begin();
                self.submitting = Some(ticket);
                self.error = None;
                Some((ticket, draft))
            }
            Err(e) => {
                self.error = Some(e.message);
                None
            }
        }
    }

    /// Apply the settled create call
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Recipe, ApiError>) -> SubmitOutcome {
        if !self.scope.accepts(ticket) {
            debug!("Discarding create response for disposed form");
            return SubmitOutcome::Discarded;
        }
        self.submitting = None;

        match result {
            Ok(recipe) => {
                info!(recipe.id = %recipe.recipe_id, recipe.name = %recipe.name, "Recipe created");
                SubmitOutcome::Created {
                    recipe,
                    next: Route::Recipes,
                }
            }
            Err(ApiError::Validation { message }) => {
                warn!(%message, "Recipe rejected by service");
                let shown = format!("{} {message}", messages::CREATE_RECIPE_FAILED);
                self.error = Some(shown.clone());
                SubmitOutcome::Failed(shown)
            }
            Err(e) => {
                warn!(error = %e, "Failed to create recipe");
                self.error = Some(messages::CREATE_RECIPE_FAILED.to_owned());
                SubmitOutcome::Failed(messages::CREATE_RECIPE_FAILED.to_owned())
            }
        }
    }

    /// Validate, submit once, and apply the result
    pub async fn submit<A: RecipeApi + ?Sized>(&mut self, api: &A) -> SubmitOutcome {
        let Some((ticket, draft)) = self.begin_submit() else {
            return SubmitOutcome::NotSubmitted;
        };
        let result = api.create_recipe(&draft).await;
        self.settle(ticket, result)
    }

    /// Tear the form down
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    /// Text rendering of the fields, any error, and the submit state
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(titles::CREATE_RECIPE);
        let _ = write!(
            out,
            "\nRecipe Name: {}\nIngredients (comma-separated): {}\nInstructions:\n{}",
            self.name, self.ingredients, self.instructions
        );
        if let Some(error) = &self.error {
            let _ = write!(out, "\n{error}");
        }
        if self.is_submitting() {
            let _ = write!(out, "\n{}", messages::LOADING);
        }
        out
    }
}
