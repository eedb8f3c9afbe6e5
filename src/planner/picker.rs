// ABOUTME: Weekly planner state machine mediating the recipe picker dialog
// ABOUTME: Closed/Open(day) transitions for open, select, cancel, and clear actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, warn};

use super::WeeklyMenu;
use crate::models::{DayOfWeek, Recipe};

/// Picker dialog state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerState {
    /// No dialog shown
    #[default]
    Closed,
    /// Dialog shown, choosing a recipe for this day
    Open(DayOfWeek),
}

impl PickerState {
    /// Whether the dialog is showing
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Day the dialog is choosing for
    #[must_use]
    pub const fn pending_day(&self) -> Option<DayOfWeek> {
        match self {
            Self::Open(day) => Some(*day),
            Self::Closed => None,
        }
    }
}

/// Planner state owned by one planner view for its lifetime
#[derive(Debug, Clone, Default)]
pub struct MenuPlanner {
    menu: WeeklyMenu,
    picker: PickerState,
}

impl MenuPlanner {
    /// Empty menu, picker closed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current menu
    #[must_use]
    pub const fn menu(&self) -> &WeeklyMenu {
        &self.menu
    }

    /// Current picker state
    #[must_use]
    pub const fn picker(&self) -> PickerState {
        self.picker
    }

    /// Recipe planned for `day`
    #[must_use]
    pub fn slot(&self, day: DayOfWeek) -> Option<&Recipe> {
        self.menu.slot(day)
    }

    /// Open the picker targeting `day`; reopening retargets it
    pub fn open_picker(&mut self, day: DayOfWeek) {
        debug!(planner.day = %day, "Opening recipe picker");
        self.picker = PickerState::Open(day);
    }

    /// Close the picker without changing the menu
    pub fn cancel_picker(&mut self) {
        self.picker = PickerState::Closed;
    }

    /// Write `recipe` into the pending day and close the picker
    ///
    /// Returns the day written, or `None` when no day was pending. The picker
    /// closes either way.
    pub fn select_recipe(&mut self, recipe: Recipe) -> Option<DayOfWeek> {
        let target = self.picker.pending_day();
        self.picker = PickerState::Closed;

        match target {
            Some(day) => {
                debug!(planner.day = %day, recipe.id = %recipe.recipe_id, "Recipe planned");
                self.menu.assign(day, recipe);
                Some(day)
            }
            None => {
                warn!(recipe.id = %recipe.recipe_id, "Recipe selected with no pending day; ignoring");
                None
            }
        }
    }

    /// Select from the picker's list by id
    ///
    /// An unknown id leaves the menu untouched; the picker closes either way.
    pub fn select_recipe_by_id(&mut self, recipes: &[Recipe], recipe_id: &str) -> Option<DayOfWeek> {
        if let Some(recipe) = recipes.iter().find(|r| r.recipe_id == recipe_id) {
            return self.select_recipe(recipe.clone());
        }
        warn!(recipe.id = recipe_id, "Picked recipe is not in the picker list");
        self.picker = PickerState::Closed;
        None
    }

    /// Empty the slot for `day`
    pub fn clear_day(&mut self, day: DayOfWeek) {
        debug!(planner.day = %day, "Clearing planned recipe");
        self.menu.clear(day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeDraft;

    fn recipe(id: &str) -> Recipe {
        RecipeDraft::new(format!("Recipe {id}"), vec![], "").into_recipe(id)
    }

    #[test]
    fn test_open_then_select_assigns_and_closes() {
        let mut planner = MenuPlanner::new();
        planner.open_picker(DayOfWeek::Wednesday);
        assert_eq!(planner.picker(), PickerState::Open(DayOfWeek::Wednesday));

        let written = planner.select_recipe(recipe("r1"));
        assert_eq!(written, Some(DayOfWeek::Wednesday));
        assert_eq!(planner.picker(), PickerState::Closed);
        assert_eq!(planner.slot(DayOfWeek::Wednesday), Some(&recipe("r1")));
    }

    #[test]
    fn test_select_without_pending_day_is_noop() {
        let mut planner = MenuPlanner::new();
        assert_eq!(planner.select_recipe(recipe("r1")), None);
        assert_eq!(planner.menu().planned_count(), 0);
        assert!(!planner.picker().is_open());
    }

    #[test]
    fn test_cancel_leaves_menu_unchanged() {
        let mut planner = MenuPlanner::new();
        planner.open_picker(DayOfWeek::Monday);
        planner.select_recipe(recipe("r1"));
        planner.open_picker(DayOfWeek::Monday);
        planner.cancel_picker();

        assert_eq!(planner.picker(), PickerState::Closed);
        assert_eq!(planner.slot(DayOfWeek::Monday), Some(&recipe("r1")));
    }

    #[test]
    fn test_select_overwrites_prior_snapshot() {
        let mut planner = MenuPlanner::new();
        planner.open_picker(DayOfWeek::Sunday);
        planner.select_recipe(recipe("r1"));
        planner.open_picker(DayOfWeek::Sunday);
        planner.select_recipe(recipe("r2"));
        assert_eq!(
            planner.slot(DayOfWeek::Sunday).map(|r| r.recipe_id.as_str()),
            Some("r2")
        );
    }

    #[test]
    fn test_select_by_unknown_id_closes_picker() {
        let mut planner = MenuPlanner::new();
        let recipes = vec![recipe("r1")];
        planner.open_picker(DayOfWeek::Tuesday);
        assert_eq!(planner.select_recipe_by_id(&recipes, "missing"), None);
        assert!(!planner.picker().is_open());
        assert!(planner.slot(DayOfWeek::Tuesday).is_none());

        planner.open_picker(DayOfWeek::Tuesday);
        assert_eq!(
            planner.select_recipe_by_id(&recipes, "r1"),
            Some(DayOfWeek::Tuesday)
        );
    }
}
