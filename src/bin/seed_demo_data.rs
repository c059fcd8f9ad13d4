// ABOUTME: Demo data seeder for the Bakehouse server
// ABOUTME: Loads a small bakery inventory and recipe set, skipping entries that already exist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data seeder for the Bakehouse server.
//!
//! Usage:
//! ```bash
//! # Seed the storage configured by STORAGE_URL
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific SQLite database
//! cargo run --bin seed-demo-data -- --storage-url sqlite:./data/bakehouse.db
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use anyhow::{Context, Result};
use bakehouse_server::{
    config::{ServerConfig, StorageUrl},
    constants::service_names,
    errors::{AppResult, ErrorCode},
    logging::LoggingConfig,
    models::{Ingredient, Recipe, RecipeRequirement, Requirements},
    resources::ServerResources,
    storage::Storage,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Bakehouse Demo Data Seeder",
    long_about = "Populate storage with a demo bakery inventory and recipe set"
)]
struct SeedArgs {
    /// Storage location override
    #[arg(long)]
    storage_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// (name, unit, quantity, low-stock threshold)
const DEMO_INGREDIENTS: &[(&str, &str, f64, f64)] = &[
    ("flour", "kg", 25.0, 5.0),
    ("sugar", "kg", 10.0, 2.0),
    ("butter", "kg", 4.0, 1.0),
    ("eggs", "pieces", 60.0, 12.0),
    ("milk", "l", 8.0, 2.0),
    ("yeast", "kg", 0.5, 0.2),
    ("salt", "kg", 2.0, 0.5),
    ("cocoa", "kg", 1.5, 0.5),
];

/// (recipe, [(ingredient, amount, unit)])
const DEMO_RECIPES: &[(&str, &[(&str, f64, &str)])] = &[
    ("bread", &[("flour", 2.0, "kg"), ("yeast", 0.05, "kg"), ("salt", 0.04, "kg")]),
    (
        "cake",
        &[
            ("flour", 1.0, "kg"),
            ("sugar", 0.8, "kg"),
            ("butter", 0.5, "kg"),
            ("eggs", 6.0, "pieces"),
        ],
    ),
    (
        "brioche",
        &[
            ("flour", 1.0, "kg"),
            ("butter", 0.4, "kg"),
            ("eggs", 4.0, "pieces"),
            ("milk", 0.2, "l"),
            ("yeast", 0.03, "kg"),
        ],
    ),
    (
        "chocolate cake",
        &[
            ("flour", 0.8, "kg"),
            ("sugar", 0.7, "kg"),
            ("cocoa", 0.2, "kg"),
            ("eggs", 5.0, "pieces"),
        ],
    ),
];

/// Treat an "already exists" rejection as a skip
fn inserted<T>(result: AppResult<T>) -> AppResult<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.code == ErrorCode::ResourceAlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::SEED_DEMO_DATA);
    if args.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(raw) = args.storage_url {
        config.storage = StorageUrl::parse_url(&raw)
            .with_context(|| format!("Invalid --storage-url value '{raw}'"))?;
    }
    info!(storage = %config.storage, "Seeding demo data");

    let storage = Storage::connect(&config.storage).await?;
    let resources = ServerResources::new(storage, Arc::new(config)).await?;

    let mut added_ingredients = 0_usize;
    for &(name, unit, quantity, threshold) in DEMO_INGREDIENTS {
        let ingredient = Ingredient::new(name, unit, quantity, threshold);
        if inserted(resources.ingredients.add(ingredient).await)? {
            added_ingredients += 1;
        } else {
            debug!(ingredient = name, "Ingredient already present, skipping");
        }
    }

    let mut added_recipes = 0_usize;
    for &(name, requirements) in DEMO_RECIPES {
        let requirements: Requirements = requirements
            .iter()
            .map(|&(ingredient, amount, unit)| {
                (ingredient.to_owned(), RecipeRequirement::new(amount, unit))
            })
            .collect();
        if inserted(resources.recipes.add(Recipe::new(name, requirements)).await)? {
            added_recipes += 1;
        } else {
            debug!(recipe = name, "Recipe already present, skipping");
        }
    }

    info!(
        ingredients.added = added_ingredients,
        ingredients.skipped = DEMO_INGREDIENTS.len() - added_ingredients,
        recipes.added = added_recipes,
        recipes.skipped = DEMO_RECIPES.len() - added_recipes,
        "Demo data seeded"
    );
    Ok(())
}
