// ABOUTME: Application constants grouped by domain
// ABOUTME: Environment variable names, transport defaults, routes, and user-facing view messages

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Environment variable names read by [`crate::config`] and [`crate::logging`]
pub mod env_vars {
    /// Base URL of the remote recipe service
    pub const API_URL: &str = "RECIPE_API_URL";
    /// Optional whole-request timeout in seconds
    pub const API_TIMEOUT_SECS: &str = "RECIPE_API_TIMEOUT_SECS";
    /// Optional connect timeout in seconds
    pub const API_CONNECT_TIMEOUT_SECS: &str = "RECIPE_API_CONNECT_TIMEOUT_SECS";
    /// Log filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Any value adds source file and line to log lines
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// HTTP transport defaults
pub mod http {
    /// Connect timeout applied when none is configured
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Header carrying the per-call correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Collection path segment on the recipe service
    pub const RECIPES_PATH: &str = "recipes";
}

/// Service identity used in logs and the HTTP user agent
pub mod service_names {
    /// Name reported in startup logs
    pub const RECIPE_PLANNER: &str = "recipe-planner";
}

/// Text shown to the user by the views
pub mod messages {
    /// Shown while a fetch is in flight
    pub const LOADING: &str = "Loading...";
    /// List view failure
    pub const FETCH_RECIPES_FAILED: &str = "Failed to fetch recipes.";
    /// Detail view failure other than not-found
    pub const FETCH_RECIPE_FAILED: &str = "Failed to fetch recipe.";
    /// Detail view not-found
    pub const RECIPE_NOT_FOUND: &str = "Recipe not found.";
    /// Create form failure other than validation
    pub const CREATE_RECIPE_FAILED: &str = "Failed to create recipe.";
    /// Planner slot with nothing assigned
    pub const NO_RECIPE_PLANNED: &str = "No recipe planned";
}

/// View headings
pub mod titles {
    /// Application bar title
    pub const APP: &str = "Recipe Planner";
    /// Recipe list heading
    pub const RECIPES: &str = "Recipes";
    /// Create form heading
    pub const CREATE_RECIPE: &str = "Create a New Recipe";
    /// Planner heading
    pub const WEEKLY_MENU_PLANNER: &str = "Weekly Menu Planner";
    /// Picker dialog heading
    pub const SELECT_A_RECIPE: &str = "Select a Recipe";
}
