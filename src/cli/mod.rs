mod runner;

pub use runner::MaintenanceRunner;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use console::style;
use tokio_cron_scheduler::JobScheduler;
use tracing::info;

use crate::config::AppConfig;
use crate::db::Database;
use crate::enums::{DbEnum, DrivingLicenseCategories, DrivingLicenseRenewalStatuses};
use crate::schedule::{SCHEDULED_JOBS, register_jobs};

const CONFIG_PATH: &str = "patente.toml";

fn print_help() {
    println!("\n {}", style("patente — driving-license administration core").bold());
    println!("\n {}", style("Commands:").bold());
    println!("   {}      Create the database and its tables", style("install").green());
    println!("   {}         Seed the regulatory enum tables", style("seed").green());
    println!("   {}    Run the nightly maintenance scheduler", style("scheduler").green());
    println!(
        "   {}  Prune old audit entries (default 30 days)",
        style("activity clean [--days=N]").green()
    );
    println!("\n {} {} <command>\n", style("Usage:").bold(), style("patente").green());
}

pub async fn run_main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("install") => install().await,
        Some("seed") => seed().await,
        Some("scheduler") => scheduler().await,
        Some("activity") => activity(&args[1..]).await,
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(other) => {
            print_help();
            bail!("Unknown command '{other}'");
        }
    }
}

async fn open_database() -> Result<Database> {
    let config = AppConfig::load(CONFIG_PATH)?;
    let db = Database::open(&config.database_path)
        .await
        .with_context(|| format!("Failed to open {}", config.database_path.display()))?;
    db.registry().register::<DrivingLicenseCategories>();
    db.registry().register::<DrivingLicenseRenewalStatuses>();
    Ok(db)
}

async fn install() -> Result<()> {
    let config = AppConfig::load(CONFIG_PATH)?;
    open_database().await?;
    println!(
        " {} Database ready at {}",
        style("✓").green(),
        config.database_path.display()
    );
    Ok(())
}

async fn seed() -> Result<()> {
    let db = open_database().await?;
    let categories = db
        .seed(DrivingLicenseCategories::cases())
        .await
        .context("Seeding driving_license_categories failed; truncate before re-seeding")?;
    let statuses = db
        .seed(DrivingLicenseRenewalStatuses::cases())
        .await
        .context("Seeding driving_license_renewal_statuses failed; truncate before re-seeding")?;
    println!(
        " {} Seeded {} categories and {} renewal statuses",
        style("✓").green(),
        categories,
        statuses
    );
    Ok(())
}

async fn scheduler() -> Result<()> {
    let config = AppConfig::load(CONFIG_PATH)?;
    let db = Arc::new(open_database().await?);

    let scheduler = JobScheduler::new().await.context("Failed to create scheduler")?;
    let runner = Arc::new(MaintenanceRunner::new(db));
    let registered = register_jobs(&scheduler, runner, Some(&config.scheduler_timezone)).await;
    if registered == 0 {
        bail!("No maintenance job could be registered");
    }
    info!(
        "Maintenance scheduler running with {}/{} jobs ({})",
        registered,
        SCHEDULED_JOBS.len(),
        config.scheduler_timezone
    );

    scheduler.start().await.context("Scheduler failed to start")?;
    tokio::signal::ctrl_c().await.context("Failed to listen for shutdown")?;
    info!("Shutting down maintenance scheduler");
    Ok(())
}

async fn activity(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("clean") => {
            let days = args
                .iter()
                .find_map(|a| a.strip_prefix("--days="))
                .map(str::parse::<u32>)
                .transpose()
                .context("--days expects a number")?
                .unwrap_or(30);
            let db = open_database().await?;
            let removed = db.prune_activity_log(days).await?;
            println!(
                " {} Removed {} audit entries older than {} days",
                style("✓").green(),
                removed,
                days
            );
            Ok(())
        }
        _ => {
            print_help();
            bail!("Usage: patente activity clean [--days=N]");
        }
    }
}
