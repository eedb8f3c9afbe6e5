// ABOUTME: Front-end views expressed as explicit state-transition types rendering to text
// ABOUTME: List, detail, create form, and planner pages plus lifecycle and routing helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Views
//!
//! Each view is driven the same way, independent of any UI toolkit:
//!
//! 1. `begin()` enters Loading and returns a [`FetchTicket`]
//! 2. the caller awaits one [`RecipeApi`](crate::api::RecipeApi) call
//! 3. `settle(ticket, result)` applies the result, or drops it when the view
//!    was disposed or re-activated in the meantime
//!
//! `load()` bundles the three steps. Failures never escape a view: they become
//! a `Failed` phase with a user-facing message.

mod create_form;
mod fetch;
mod lifecycle;
mod planner_view;
mod recipe_detail;
mod recipe_list;
mod route;

pub use create_form::{split_ingredients, CreateRecipeForm, SubmitOutcome};
pub use fetch::FetchPhase;
pub use lifecycle::{FetchTicket, ViewScope};
pub use planner_view::PlannerView;
pub use recipe_detail::RecipeDetailView;
pub use recipe_list::RecipeListView;
pub use route::Route;
