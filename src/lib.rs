// ABOUTME: Main library entry point for the recipe planner client
// ABOUTME: Recipe service adapter, weekly menu planner, and toolkit-independent views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Planner
//!
//! A client for a remote recipe REST service. It lists recipes, shows recipe
//! details, creates recipes from a form, and lets a user plan a week of meals
//! in memory.
//!
//! ## Architecture
//!
//! - **Models**: `Recipe`, `RecipeDraft`, `DayOfWeek`
//! - **API**: the `RecipeApi` adapter contract and its HTTP implementation
//! - **Planner**: the seven-day `WeeklyMenu` and picker state machine
//! - **Views**: list, detail, create, and planner pages as explicit state
//!   transitions rendering to text
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_planner::api::HttpRecipeClient;
//! use recipe_planner::config::ClientConfig;
//! use recipe_planner::errors::AppResult;
//! use recipe_planner::views::RecipeListView;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = HttpRecipeClient::new(&config)?;
//!
//!     let mut view = RecipeListView::new();
//!     view.load(&client).await;
//!     println!("{}", view.render());
//!     Ok(())
//! }
//! ```

/// Recipe service adapter contract and HTTP client
pub mod api;

/// Configuration loaded from environment variables
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Recipe and day-of-week data models
pub mod models;

/// In-memory weekly menu planning
pub mod planner;

/// Page views driven by explicit state transitions
pub mod views;
