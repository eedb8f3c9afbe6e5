// ABOUTME: Command modules for the recipe-planner CLI
// ABOUTME: Each command drives one view through its transitions and prints the rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod navigation;
pub mod planner;
pub mod recipes;
