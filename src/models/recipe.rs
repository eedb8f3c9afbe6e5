// ABOUTME: Recipe and RecipeDraft data models matching the recipe service wire shape
// ABOUTME: Recipes always carry a server-assigned id; drafts never do
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recipe as stored by the remote service
///
/// Extra fields the service may attach (category, tags, timestamps) are ignored
/// on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Opaque server-assigned identifier
    pub recipe_id: String,
    /// Display name
    pub name: String,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-form instructions; embedded line breaks are significant
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// Ingredients joined for one-line display (`"egg, flour"`)
    #[must_use]
    pub fn ingredients_summary(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// Payload submitted to create a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Display name
    pub name: String,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
    /// Free-form instructions
    pub instructions: String,
}

impl RecipeDraft {
    /// Create a draft from its three fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
        }
    }

    /// Attach a server-assigned id, producing the stored recipe
    #[must_use]
    pub fn into_recipe(self, recipe_id: impl Into<String>) -> Recipe {
        Recipe {
            recipe_id: recipe_id.into(),
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}
