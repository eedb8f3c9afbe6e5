// ABOUTME: Weekly planner page combining the picker's recipe fetch with local menu state
// ABOUTME: The menu is created with the view and dropped with it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use tracing::{debug, warn};

use super::{FetchPhase, FetchTicket, ViewScope};
use crate::api::{ApiError, RecipeApi};
use crate::constants::{messages, titles};
use crate::models::{DayOfWeek, Recipe};
use crate::planner::{MenuPlanner, PickerState};

/// Weekly menu planner page
///
/// Fetches the recipe list once per activation to fill the picker. A failed
/// fetch shows a message but leaves the planner usable with an empty picker.
#[derive(Debug, Default)]
pub struct PlannerView {
    recipes: FetchPhase<Vec<Recipe>>,
    planner: MenuPlanner,
    scope: ViewScope,
}

impl PlannerView {
    /// New planner with an empty menu
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for disposing this view from outside
    #[must_use]
    pub fn scope(&self) -> ViewScope {
        self.scope.clone()
    }

    /// Phase of the picker's recipe fetch
    #[must_use]
    pub const fn recipes_phase(&self) -> &FetchPhase<Vec<Recipe>> {
        &self.recipes
    }

    /// Recipes offered by the picker; empty until loaded
    #[must_use]
    pub fn picker_recipes(&self) -> &[Recipe] {
        self.recipes.data().map_or(&[][..], Vec::as_slice)
    }

    /// Planner state
    #[must_use]
    pub const fn planner(&self) -> &MenuPlanner {
        &self.planner
    }

    /// Enter Loading for the picker fetch
    pub fn begin(&mut self) -> FetchTicket {
        self.recipes = FetchPhase::Loading;
        self.scope.begin()
    }

    /// Apply the settled picker fetch; returns `false` if dropped as stale
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<Vec<Recipe>, ApiError>) -> bool {
        if !self.scope.accepts(ticket) {
            debug!("Discarding stale planner recipe list");
            return false;
        }
        self.recipes = match result {
            Ok(recipes) => FetchPhase::Loaded(recipes),
            Err(e) => {
                warn!(error = %e, "Failed to fetch recipes for planner");
                FetchPhase::Failed(messages::FETCH_RECIPES_FAILED.to_owned())
            }
        };
        true
    }

    /// Activate: fetch the picker list
    pub async fn load<A: RecipeApi + ?Sized>(&mut self, api: &A) -> bool {
        let ticket = self.begin();
        let result = api.list_recipes().await;
        self.settle(ticket, result)
    }

    /// "Add Recipe" on a day card
    pub fn open_picker(&mut self, day: DayOfWeek) {
        self.planner.open_picker(day);
    }

    /// Picker dismissed
    pub fn cancel_picker(&mut self) {
        self.planner.cancel_picker();
    }

    /// Recipe chosen in the picker
    pub fn select_recipe(&mut self, recipe: Recipe) -> Option<DayOfWeek> {
        self.planner.select_recipe(recipe)
    }

    /// Recipe chosen in the picker by id
    pub fn select_recipe_by_id(&mut self, recipe_id: &str) -> Option<DayOfWeek> {
        let recipes = self.recipes.data().map_or(&[][..], Vec::as_slice);
        self.planner.select_recipe_by_id(recipes, recipe_id)
    }

    /// "Clear" on a day card
    pub fn clear_day(&mut self, day: DayOfWeek) {
        self.planner.clear_day(day);
    }

    /// Tear the view down
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    /// Text rendering of the week, marking `today`, plus the open picker
    #[must_use]
    pub fn render(&self, today: Option<DayOfWeek>) -> String {
        if self.recipes.is_loading() {
            return messages::LOADING.to_owned();
        }

        let mut out = String::from(titles::WEEKLY_MENU_PLANNER);
        if let Some(error) = self.recipes.error() {
            let _ = write!(out, "\n{error}");
        }
        for (day, slot) in self.planner.menu().iter() {
            let marker = if today == Some(day) { " (today)" } else { "" };
            let planned = slot.map_or(messages::NO_RECIPE_PLANNED, |recipe| recipe.name.as_str());
            let _ = write!(out, "\n{day}{marker}: {planned}");
        }

        if let PickerState::Open(day) = self.planner.picker() {
            let _ = write!(out, "\n\n{} ({day})", titles::SELECT_A_RECIPE);
            for recipe in self.picker_recipes() {
                let _ = write!(out, "\n- {} [{}]", recipe.name, recipe.recipe_id);
            }
        }
        out
    }
}
