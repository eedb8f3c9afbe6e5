// ABOUTME: recipe-planner CLI - browse, create, and plan recipes against a remote recipe service
// ABOUTME: Parses arguments, sets up logging and the HTTP client, and dispatches to view-driving commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! export RECIPE_API_URL=http://localhost:5000/
//!
//! # List all recipes
//! recipe-planner list
//!
//! # Show one recipe
//! recipe-planner show recipe_019
//!
//! # Create a recipe
//! recipe-planner create --name "Miso Soup" --ingredients "dashi, miso, tofu" --instructions "Simmer."
//!
//! # Plan a week (held in memory only)
//! recipe-planner plan --assign mon=recipe_019 --assign fri=recipe_020 --clear fri
//!
//! # Open a page by path
//! recipe-planner open /recipes/recipe_019
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use recipe_planner::{
    api::HttpRecipeClient,
    config::ClientConfig,
    errors::AppResult,
    logging::LoggingConfig,
    models::DayOfWeek,
    views::Route,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "recipe-planner",
    about = "Recipe browser and weekly menu planner",
    long_about = "Lists, shows, and creates recipes on a remote recipe service and plans a week of meals in memory."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe service base URL (overrides RECIPE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List all recipes
    List,

    /// Show one recipe
    Show {
        /// Recipe identifier
        recipe_id: String,
    },

    /// Create a recipe
    Create {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Comma-separated ingredients
        #[arg(long)]
        ingredients: String,

        /// Preparation instructions
        #[arg(long)]
        instructions: String,
    },

    /// Plan a week of meals (not persisted)
    Plan {
        /// Assign a recipe to a day, as DAY=RECIPE_ID
        #[arg(long = "assign", value_name = "DAY=RECIPE_ID", value_parser = parse_assignment)]
        assignments: Vec<(DayOfWeek, String)>,

        /// Clear a day after the assignments are applied
        #[arg(long = "clear", value_name = "DAY")]
        clears: Vec<DayOfWeek>,
    },

    /// Open a page by its path (/, /recipes, /recipes/ID, /create, /planner)
    Open {
        /// Page path
        path: String,
    },
}

fn parse_assignment(raw: &str) -> Result<(DayOfWeek, String), String> {
    let (day, recipe_id) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DAY=RECIPE_ID, got '{raw}'"))?;
    let day = day.parse::<DayOfWeek>().map_err(|e| e.to_string())?;
    let recipe_id = recipe_id.trim();
    if recipe_id.is_empty() {
        return Err(format!("missing recipe id in '{raw}'"));
    }
    Ok((day, recipe_id.to_owned()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "recipe-planner failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<ExitCode> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    let config = match cli.api_url.as_deref() {
        Some(url) => ClientConfig::from_env_with_base_url(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = HttpRecipeClient::new(&config)?;
    info!(api.base_url = %client.base_url(), "Recipe service client ready");

    match cli.command {
        Command::List => Ok(commands::recipes::list(&client).await),
        Command::Show { recipe_id } => Ok(commands::recipes::show(&client, recipe_id).await),
        Command::Create {
            name,
            ingredients,
            instructions,
        } => Ok(commands::recipes::create(&client, name, ingredients, instructions).await),
        Command::Plan {
            assignments,
            clears,
        } => Ok(commands::planner::plan(&client, &assignments, &clears).await),
        Command::Open { path } => {
            let route = path.parse::<Route>()?;
            Ok(commands::navigation::open(&client, route).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("Mon=recipe_019"),
            Ok((DayOfWeek::Monday, "recipe_019".to_owned()))
        );
        assert!(parse_assignment("Mon").is_err());
        assert!(parse_assignment("Someday=r1").is_err());
        assert!(parse_assignment("sun= ").is_err());
    }

    #[test]
    fn test_cli_parses_repeated_plan_flags() {
        let cli = Cli::try_parse_from([
            "recipe-planner",
            "plan",
            "--assign",
            "mon=r1",
            "--assign",
            "tue=r2",
            "--clear",
            "mon",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Plan { ref assignments, ref clears }
                if assignments.len() == 2 && clears == &[DayOfWeek::Monday]
        ));
    }
}
