// ABOUTME: Configuration management module for the recipe planner client
// ABOUTME: Environment-only configuration with CLI overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: recipe service location and transport timeouts

/// Recipe service location and transport settings from environment variables
pub mod environment;

pub use environment::ClientConfig;
