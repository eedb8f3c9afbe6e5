// ABOUTME: Navigation routes of the recipe planner front end
// ABOUTME: Parses and formats the five page paths and lists the navigation bar entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::AppError;

/// A page of the front end
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/recipes`
    Recipes,
    /// `/recipes/{recipe_id}`
    RecipeDetail(String),
    /// `/create`
    CreateRecipe,
    /// `/planner`
    Planner,
}

impl Route {
    /// Entries of the navigation bar, in display order
    pub const NAVIGATION: [Self; 4] = [Self::Home, Self::Recipes, Self::CreateRecipe, Self::Planner];

    /// Label shown in the navigation bar
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Recipes => "Recipes",
            Self::RecipeDetail(_) => "Recipe",
            Self::CreateRecipe => "Create Recipe",
            Self::Planner => "Menu Planner",
        }
    }

    /// Detail route for a recipe
    #[must_use]
    pub fn recipe(recipe_id: impl Into<String>) -> Self {
        Self::RecipeDetail(recipe_id.into())
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Home => f.write_str("/"),
            Self::Recipes => f.write_str("/recipes"),
            Self::RecipeDetail(id) => write!(f, "/recipes/{}", urlencoding::encode(id)),
            Self::CreateRecipe => f.write_str("/create"),
            Self::Planner => f.write_str("/planner"),
        }
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|seg| !seg.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["recipes"] => Ok(Self::Recipes),
            ["recipes", id] => urlencoding::decode(id)
                .map(|decoded| Self::RecipeDetail(decoded.into_owned()))
                .map_err(|e| AppError::invalid_input(format!("Invalid recipe id in {s}: {e}"))),
            ["create"] => Ok(Self::CreateRecipe),
            ["planner"] => Ok(Self::Planner),
            _ => Err(AppError::not_found(format!("Route {s}"))),
        }
    }
}
