// ABOUTME: Domain models shared by the API adapter, the views, and the planner
// ABOUTME: Re-exports Recipe, RecipeDraft, and DayOfWeek
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Recipe`: a recipe as returned by the service, always carrying its `recipe_id`
//! - `RecipeDraft`: the creation payload, which by construction has no id
//! - `DayOfWeek`: the seven planner keys

mod day;
mod recipe;

pub use day::DayOfWeek;
pub use recipe::{Recipe, RecipeDraft};
