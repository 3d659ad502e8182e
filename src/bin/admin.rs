//! CLI administration tool for shortlink.
//!
//! Runs the same services as the HTTP server directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL, optionally attaching an alias
//! cargo run --bin admin -- shorten https://example.com --alias example
//!
//! # Resolve a short code
//! cargo run --bin admin -- resolve 1
//!
//! # Show a canonical URL and all its aliases
//! cargo run --bin admin -- inspect 1
//!
//! # Assign codes to rows written without one
//! cargo run --bin admin -- backfill --yes
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (`DATABASE_URL` / `DB_PATH`, pool settings).

use shortlink::application::services::{ResolutionService, ShorteningService};
use shortlink::config;
use shortlink::domain::repositories::UrlRepository;
use shortlink::infrastructure::persistence::{SqliteUrlRepository, pool};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten
        long_url: String,

        /// Custom alias to attach
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Resolve a short code to its long URL
    Resolve {
        /// Canonical short code
        code: String,
    },

    /// Show a canonical URL and its aliases
    Inspect {
        /// Canonical short code
        code: String,
    },

    /// Assign short codes to canonical URLs that have none
    Backfill {
        /// Rows fetched per round
        #[arg(short, long, default_value_t = 500)]
        batch: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = pool::connect(&config).await?;
    pool::migrate(&pool).await?;

    let repo = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::Shorten { long_url, alias } => shorten(repo, long_url, alias).await?,
        Commands::Resolve { code } => resolve(repo, code).await?,
        Commands::Inspect { code } => inspect(repo, code).await?,
        Commands::Backfill { batch, yes } => backfill(repo, batch, yes).await?,
        Commands::Stats => handle_stats(repo).await?,
        Commands::Db { action } => handle_db_action(action, repo).await?,
    }

    Ok(())
}

async fn shorten(
    repo: Arc<SqliteUrlRepository>,
    long_url: String,
    alias: Option<String>,
) -> Result<()> {
    let service = ShorteningService::new(repo);

    let outcome = service
        .shorten(&long_url, alias.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    let status = if outcome.created {
        "created".green()
    } else {
        "existing".yellow()
    };

    println!("{}", "🔗 Short link".bright_blue().bold());
    println!();
    println!("  Long URL:   {}", long_url.cyan());
    println!(
        "  Short code: {} ({})",
        outcome.short_code.bright_yellow().bold(),
        status
    );
    if let Some(alias) = outcome.custom_alias {
        println!("  Alias:      {}", alias.bright_white());
    }
    println!();

    Ok(())
}

async fn resolve(repo: Arc<SqliteUrlRepository>, code: String) -> Result<()> {
    let service = ResolutionService::new(repo);

    match service.resolve(&code).await {
        Ok(long_url) => println!("{}", long_url),
        Err(e) => anyhow::bail!("{}: {}", code, e),
    }

    Ok(())
}

/// Prints a canonical URL and every alias attached to it.
///
/// # Output Format
///
/// ```text
/// 🔍 Short code 1
///
///   Long URL: https://example.com
///   Created:  2025-01-15 10:30
///
///   ID   Alias                          Created
///   ─────────────────────────────────────────────────────────
///   1    example                        2025-01-15 10:30
/// ```
async fn inspect(repo: Arc<SqliteUrlRepository>, code: String) -> Result<()> {
    let service = ResolutionService::new(repo);

    let (url, aliases) = service
        .inspect(&code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!(
        "{} {}",
        "🔍 Short code".bright_blue().bold(),
        code.bright_yellow().bold()
    );
    println!();
    println!("  Long URL: {}", url.long_url.cyan());
    println!(
        "  Created:  {}",
        url.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    if aliases.is_empty() {
        println!("{}", "  No custom aliases".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(57).bright_black());

    for alias in &aliases {
        println!(
            "  {:<4} {:<30} {}",
            alias.id.to_string().bright_black(),
            alias.alias.cyan(),
            alias
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        aliases.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Assigns missing short codes after confirmation.
async fn backfill(repo: Arc<SqliteUrlRepository>, batch: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🛠  Backfill short codes".bright_blue().bold());
    println!();

    let stats = repo
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if stats.unassigned == 0 {
        println!("{}", "✅ Every canonical URL already has a short code".green());
        return Ok(());
    }

    println!(
        "  Rows without a short code: {}",
        stats.unassigned.to_string().bright_yellow().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Assign short codes now?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = ShorteningService::new(repo);
    let updated = service
        .backfill_short_codes(batch)
        .await
        .map_err(|e| anyhow::anyhow!("Backfill failed: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Short codes assigned:".green().bold(),
        updated.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays row counts.
async fn handle_stats(repo: Arc<SqliteUrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let stats = repo
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Canonical URLs: {}",
        stats.urls.to_string().bright_green().bold()
    );
    println!(
        "  Custom aliases: {}",
        stats.aliases.to_string().bright_green().bold()
    );
    if stats.unassigned > 0 {
        println!(
            "  Missing codes:  {}",
            stats.unassigned.to_string().bright_red().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repo: Arc<SqliteUrlRepository>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
