//! Cartera CLI - Database migrations and data backfills.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending database migrations
//! cartera-cli migrate
//!
//! # Preview the legacy portal backfill (dry run)
//! cartera-cli backfill-portal
//!
//! # Apply it, keeping the newest contact's credentials on conflict
//! cartera-cli backfill-portal --apply --conflicts latest
//! ```
//!
//! # Commands
//!
//! - `migrate` - Apply pending schema migrations
//! - `backfill-portal` - Copy legacy per-contact portal fields onto clients

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::backfill::ConflictPolicy;

#[derive(Parser)]
#[command(name = "cartera-cli")]
#[command(author, version, about = "Cartera CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Copy legacy per-contact portal credentials onto the owning clients
    BackfillPortal {
        /// Write the changes (without this flag, only print the plan)
        #[arg(long)]
        apply: bool,

        /// Which contact wins when a client has several with portal data
        #[arg(long, value_enum, default_value = "first")]
        conflicts: ConflictPolicy,
    },
}

#[tokio::main]
async fn main() {
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
        Commands::BackfillPortal { apply, conflicts } => {
            commands::backfill::run(apply, conflicts).await?;
        }
    }
    Ok(())
}
