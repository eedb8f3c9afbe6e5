// ABOUTME: Page navigation command for the recipe-planner CLI
// ABOUTME: Renders the home page with the navigation bar or dispatches a route to its page command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;
use std::process::ExitCode;

use recipe_planner::{
    api::RecipeApi,
    constants::titles,
    views::{CreateRecipeForm, Route},
};

use super::{planner, recipes};

fn render_home() -> String {
    let mut out = String::from(titles::APP);
    for route in &Route::NAVIGATION {
        let _ = write!(out, "\n  {:<14} {route}", route.label());
    }
    out
}

/// Open the page at `route`
pub async fn open(api: &dyn RecipeApi, route: Route) -> ExitCode {
    match route {
        Route::Home => {
            println!("{}", render_home());
            ExitCode::SUCCESS
        }
        Route::Recipes => recipes::list(api).await,
        Route::RecipeDetail(recipe_id) => recipes::show(api, recipe_id).await,
        Route::CreateRecipe => {
            println!("{}", CreateRecipeForm::new().render());
            ExitCode::SUCCESS
        }
        Route::Planner => planner::plan(api, &[], &[]).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_navigation() {
        let home = render_home();
        assert!(home.starts_with(titles::APP));
        assert!(home.contains("Menu Planner"));
        assert!(home.contains("/create"));
    }
}
