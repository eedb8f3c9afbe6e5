// ABOUTME: Weekly planner command for the recipe-planner CLI
// ABOUTME: Replays assignments as picker open/select transitions, applies clears, and prints the week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use recipe_planner::{api::RecipeApi, models::DayOfWeek, views::PlannerView};
use tracing::warn;

/// Build a week from `assignments` then `clears` and print it
pub async fn plan(
    api: &dyn RecipeApi,
    assignments: &[(DayOfWeek, String)],
    clears: &[DayOfWeek],
) -> ExitCode {
    let mut view = PlannerView::new();
    view.load(api).await;

    let mut code = ExitCode::SUCCESS;
    for (day, recipe_id) in assignments {
        view.open_picker(*day);
        if view.select_recipe_by_id(recipe_id).is_none() {
            warn!(%day, %recipe_id, "Recipe not offered by the picker");
            eprintln!("No recipe '{recipe_id}' to assign to {day}");
            code = ExitCode::FAILURE;
        }
    }
    for day in clears {
        view.clear_day(*day);
    }

    println!("{}", view.render(Some(DayOfWeek::today())));
    if view.recipes_phase().error().is_some() {
        code = ExitCode::FAILURE;
    }
    code
}
