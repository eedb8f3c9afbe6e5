// ABOUTME: Recipe list, detail, and create commands for the recipe-planner CLI
// ABOUTME: Loads the matching view, prints its rendering, and maps the final phase to an exit code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use recipe_planner::{
    api::RecipeApi,
    views::{CreateRecipeForm, FetchPhase, RecipeDetailView, RecipeListView, SubmitOutcome},
};
use tracing::info;

const fn exit_code<T>(phase: &FetchPhase<T>) -> ExitCode {
    match phase {
        FetchPhase::Loaded(_) => ExitCode::SUCCESS,
        FetchPhase::Loading | FetchPhase::Failed(_) => ExitCode::FAILURE,
    }
}

/// Render the recipe list
pub async fn list(api: &dyn RecipeApi) -> ExitCode {
    let mut view = RecipeListView::new();
    view.load(api).await;
    println!("{}", view.render());
    exit_code(view.phase())
}

/// Render one recipe
pub async fn show(api: &dyn RecipeApi, recipe_id: String) -> ExitCode {
    let mut view = RecipeDetailView::new(recipe_id);
    view.load(api).await;
    println!("{}", view.render());
    exit_code(view.phase())
}

/// Fill and submit the create form, then show the refreshed list
pub async fn create(
    api: &dyn RecipeApi,
    name: String,
    ingredients: String,
    instructions: String,
) -> ExitCode {
    let mut form = CreateRecipeForm::new();
    form.set_name(name);
    form.set_ingredients(ingredients);
    form.set_instructions(instructions);

    match form.submit(api).await {
        SubmitOutcome::Created { recipe, next } => {
            info!(recipe.id = %recipe.recipe_id, route = %next, "Navigating after create");
            println!("Created recipe {} ({})\n", recipe.name, recipe.recipe_id);
            list(api).await
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::NotSubmitted | SubmitOutcome::Discarded => {
            println!("{}", form.render());
            ExitCode::FAILURE
        }
    }
}
