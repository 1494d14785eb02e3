//! CLI administration tool for the shortener.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- links create https://www.rust-lang.org
//!
//! # Show statistics for a code
//! cargo run --bin admin -- links stats abc123
//!
//! # Delete a code
//! cargo run --bin admin -- links delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shortener::config`].

use shortener::application::services::LinkService;
use shortener::config;
use shortener::infrastructure::persistence::SqliteLinkRepository;
use shortener::server::connect_database;
use shortener::utils::code_generator::CodeGenerator;
use shortener::utils::timestamp::format_timestamp;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing the shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL
    Create {
        /// Absolute URL to shorten
        url: String,
    },

    /// Show a link with its access count
    Stats {
        /// Short code
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show link and access totals
    Info,
}

type Service = LinkService<SqliteLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Links { action } => {
            let service = LinkService::new(
                Arc::new(SqliteLinkRepository::new(Arc::new(pool))),
                CodeGenerator::new(config.short_code_length),
            );
            handle_link_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::Create { url } => {
            let link = service.create_short_link(url).await?;

            println!("{}", "Short link created".green().bold());
            println!("  Code: {}", link.short_code.bright_yellow().bold());
            println!("  URL:  {}", link.url.cyan());
            println!("  ID:   {}", link.id.to_string().bright_black());
        }
        LinkAction::Stats { code } => {
            let stats = service.get_stats(&code).await?;
            let link = stats.link;

            println!("{}", "Link statistics".bright_blue().bold());
            println!();
            println!("  Code:     {}", link.short_code.bright_yellow());
            println!("  URL:      {}", link.url.cyan());
            println!(
                "  Created:  {}",
                format_timestamp(&link.created_at).bright_black()
            );
            match link.updated_at {
                Some(updated_at) => {
                    println!("  Updated:  {}", format_timestamp(&updated_at).bright_black())
                }
                None => println!("  Updated:  {}", "never".bright_black()),
            }
            println!(
                "  Accesses: {}",
                stats.access_count.to_string().bright_green().bold()
            );
            println!();
        }
        LinkAction::Delete { code, yes } => {
            let stats = service.get_stats(&code).await?;

            println!("  Code: {}", code.bright_yellow());
            println!("  URL:  {}", stats.link.url.cyan());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this link?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            service.delete_link(&code).await?;
            println!("{}", "Link deleted".green().bold());
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let accesses: i64 =
                sqlx::query_scalar("SELECT COALESCE(SUM(COALESCE(accesscount, 0)), 0) FROM urls")
                    .fetch_one(pool)
                    .await?;

            println!("  SQLite:   {}", version.bright_white());
            println!(
                "  Links:    {}",
                links_count.to_string().bright_green().bold()
            );
            println!(
                "  Accesses: {}",
                accesses.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
