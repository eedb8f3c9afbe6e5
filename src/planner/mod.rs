// ABOUTME: Weekly menu planning state kept in client memory only
// ABOUTME: Re-exports WeeklyMenu, MenuPlanner, and the picker state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Menu Planner
//!
//! The menu lives only as long as the planner view that owns it; nothing here
//! is sent to the recipe service.

mod menu;
mod picker;

pub use menu::WeeklyMenu;
pub use picker::{MenuPlanner, PickerState};
