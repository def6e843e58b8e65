//! Fraiche CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations (shared shop schema)
//! fraiche-cli migrate
//!
//! # Seed the catalog from a YAML file
//! fraiche-cli seed --file crates/cli/seeds/boutique.yaml
//!
//! # Wipe and reseed
//! fraiche-cli seed --file crates/cli/seeds/boutique.yaml --reset
//!
//! # Print an argon2 hash for ADMIN_PASSWORD_HASH (password on stdin)
//! fraiche-cli admin hash-password
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed database with catalog data
//! - `admin hash-password` - Hash the shared admin password

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fraiche-cli")]
#[command(author, version, about = "Fraiche CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed database with catalog data from a YAML file
    Seed {
        /// Path to the YAML seed file
        #[arg(short, long)]
        file: String,

        /// Delete existing shop data before seeding
        #[arg(long)]
        reset: bool,
    },
    /// Admin credential tools
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Read a password from stdin and print its argon2 hash
    HashPassword,
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
        Commands::Seed { file, reset } => commands::seed::run(&file, reset).await?,
        Commands::Admin { action } => match action {
            AdminAction::HashPassword => commands::admin::hash_password()?,
        },
    }
    Ok(())
}
