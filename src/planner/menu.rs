// ABOUTME: Seven-slot weekly menu holding owned recipe snapshots
// ABOUTME: Keys are fixed by construction; only slot contents change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{DayOfWeek, Recipe};

/// Mapping from each day of the week to an optional recipe snapshot
///
/// Backed by a fixed array indexed by [`DayOfWeek`], so no operation can add,
/// remove, or rename a day. Each slot owns its own copy of the recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyMenu {
    slots: [Option<Recipe>; 7],
}

impl WeeklyMenu {
    /// An empty week
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipe planned for `day`, if any
    #[must_use]
    pub fn slot(&self, day: DayOfWeek) -> Option<&Recipe> {
        self.slots[day.index()].as_ref()
    }

    /// Store a snapshot of `recipe` on `day`, replacing what was there
    pub fn assign(&mut self, day: DayOfWeek, recipe: Recipe) {
        self.slots[day.index()] = Some(recipe);
    }

    /// Empty the slot for `day`
    pub fn clear(&mut self, day: DayOfWeek) {
        self.slots[day.index()] = None;
    }

    /// Days in Monday..Sunday order paired with their slot
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, Option<&Recipe>)> + '_ {
        DayOfWeek::ALL
            .into_iter()
            .map(move |day| (day, self.slot(day)))
    }

    /// Number of days with a recipe
    #[must_use]
    pub fn planned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
