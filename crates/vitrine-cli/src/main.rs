#![forbid(unsafe_code)]

//! Vitrine CLI
//!
//! `vitrine sync` fetches READMEs for every catalog project and updates
//! the JSON cache consumed by the page builder. `vitrine check` parses
//! the hand-authored catalog and reports counts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrine_catalog::Catalog;
use vitrine_readme::{HttpFetcher, SkipPolicy, sync_to_file};

/// Project-navigation catalog and README cache
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Project-navigation catalog and README cache", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch READMEs for every project and update the cache file
    Sync {
        /// Catalog file path
        #[arg(long, default_value = "config/catalog.toml")]
        catalog: PathBuf,

        /// Cache file path (read-modify-write)
        #[arg(long, default_value = "public/readmes.json")]
        output: PathBuf,
    },
    /// Parse the catalog and report group/project counts
    Check {
        /// Catalog file path
        #[arg(long, default_value = "config/catalog.toml")]
        catalog: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vitrine=debug".into()),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Sync { catalog, output } => {
            let catalog = Catalog::load(&catalog)?;
            let policy = SkipPolicy::from_env();
            if policy.is_active() {
                tracing::info!(hosts = ?policy.hosts(), "Internal-host skip policy active");
            }

            let fetcher = HttpFetcher::new();
            let report = sync_to_file(&catalog, &fetcher, &policy, &output).await?;

            // Failures and skips are not fatal; the summary is the whole
            // user-visible surface of the run.
            println!("[readme] {}", report.summary());
        }
        Command::Check { catalog } => {
            let catalog = Catalog::load(&catalog)?;
            println!(
                "catalog ok: {} groups | {} projects",
                catalog.groups.len(),
                catalog.project_count()
            );
        }
    }

    Ok(())
}
