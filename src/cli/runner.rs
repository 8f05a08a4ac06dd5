//! Dispatch target for the maintenance rotation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::db::Database;
use crate::schedule::CommandRunner;

/// Runs scheduled maintenance commands. The audit-log cleanup is handled
/// in-process; backup and telemetry commands are external programs this
/// core only dispatches to.
pub struct MaintenanceRunner {
    db: Arc<Database>,
}

impl MaintenanceRunner {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn clean_activity_log(&self, args: &[String]) {
        let days = args
            .iter()
            .find_map(|a| a.strip_prefix("--days="))
            .and_then(|d| d.parse::<u32>().ok())
            .unwrap_or(30);
        match self.db.prune_activity_log(days).await {
            Ok(removed) => info!("activity-log:clean removed {} entries (>{} days)", removed, days),
            Err(e) => error!("activity-log:clean failed: {}", e),
        }
    }

    async fn dispatch_external(&self, command: &str, args: &[String]) {
        // Opaque commands (backup:*, telemetry:prune) resolve to programs
        // installed alongside the service, named after the identifier.
        let program = command.replace(':', "-");
        match tokio::process::Command::new(&program).args(args).status().await {
            Ok(status) if status.success() => info!("{} finished", command),
            Ok(status) => warn!("{} exited with {}", command, status),
            Err(e) => warn!("{} could not be started: {}", command, e),
        }
    }
}

#[async_trait]
impl CommandRunner for MaintenanceRunner {
    async fn run(&self, command: &str, args: &[String]) {
        info!("Running scheduled command '{}'", command);
        match command {
            "activity-log:clean" => self.clean_activity_log(args).await,
            _ => self.dispatch_external(command, args).await,
        }
    }
}
