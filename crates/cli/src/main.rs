//! Foodgram CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! foodgram-cli migrate
//!
//! # Load the ingredient catalogue from a JSON fixture
//! foodgram-cli load-ingredients data/ingredients.json
//!
//! # Print a user's shopping list
//! foodgram-cli shopping-list --user 1
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `load-ingredients` - Load ingredient fixtures (idempotent)
//! - `shopping-list` - Render the shopping list for a user's cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "foodgram-cli")]
#[command(author, version, about = "Foodgram CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Load ingredients from a JSON fixture
    LoadIngredients {
        /// Path to a JSON array of `{"name", "measurement_unit"}` objects
        file: PathBuf,
    },
    /// Print the shopping list for a user's cart
    ShoppingList {
        /// User ID
        #[arg(short, long)]
        user: i32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::LoadIngredients { file } => {
            commands::ingredients::load(&file).await?;
        }
        Commands::ShoppingList { user } => commands::shopping_list::print(user).await?,
    }
    Ok(())
}
