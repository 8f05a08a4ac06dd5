//! Declarative registry of nightly maintenance jobs.
//!
//! The table itself is pure data: command identifier, arguments, cron rule,
//! timezone. Interpreting the recurrence and running commands belongs to
//! the scheduler runtime; [`register_jobs`] is the thin adapter wiring the
//! table into it. Overlap prevention between runs stays with the runtime.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

/// One scheduled command. Cron rules use the six-field form
/// (sec min hour day month weekday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledJob {
    pub command: &'static str,
    pub args: &'static [&'static str],
    pub cron: &'static str,
    pub timezone: &'static str,
}

const TZ: &str = "Europe/Rome";

/// The nightly maintenance rotation.
pub const SCHEDULED_JOBS: &[ScheduledJob] = &[
    ScheduledJob {
        command: "activity-log:clean",
        args: &["--days=30"],
        cron: "0 0 0 * * *",
        timezone: TZ,
    },
    ScheduledJob {
        command: "backup:clean",
        args: &[],
        cron: "0 0 1 * * *",
        timezone: TZ,
    },
    ScheduledJob {
        command: "backup:monitor",
        args: &[],
        cron: "0 0 3 * * *",
        timezone: TZ,
    },
    ScheduledJob {
        command: "backup:run",
        args: &[],
        cron: "0 0 22 * * *",
        timezone: TZ,
    },
    ScheduledJob {
        command: "telemetry:prune",
        args: &[],
        cron: "0 0 23 * * *",
        timezone: TZ,
    },
];

/// Collaborator that runs a named command when its schedule fires. No
/// result flows back into this layer.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str, args: &[String]);
}

/// Register every entry of [`SCHEDULED_JOBS`] with the scheduler.
///
/// `timezone_override` replaces each entry's timezone when given (the
/// deployment config's `scheduler_timezone`). An entry with an invalid
/// timezone or cron rule is logged and skipped; the others still register.
/// Returns the number of jobs registered.
pub async fn register_jobs(
    scheduler: &JobScheduler,
    runner: Arc<dyn CommandRunner>,
    timezone_override: Option<&str>,
) -> usize {
    let mut registered = 0;
    for job in SCHEDULED_JOBS {
        let tz_name = timezone_override.unwrap_or(job.timezone);
        let tz: chrono_tz::Tz = match tz_name.parse() {
            Ok(tz) => tz,
            Err(_) => {
                error!("Unknown timezone '{}' for job '{}'", tz_name, job.command);
                continue;
            }
        };

        let runner = runner.clone();
        let command = job.command;
        let args: Vec<String> = job.args.iter().map(|a| a.to_string()).collect();

        match Job::new_async_tz(job.cron, tz, move |_uuid, _l| {
            let runner = runner.clone();
            let args = args.clone();
            Box::pin(async move {
                runner.run(command, &args).await;
            })
        }) {
            Ok(cron_job) => match scheduler.add(cron_job).await {
                Ok(_) => {
                    info!("Scheduled '{}' at '{}' ({})", job.command, job.cron, tz_name);
                    registered += 1;
                }
                Err(e) => {
                    error!("Failed to register job '{}': {}", job.command, e);
                }
            },
            Err(e) => {
                error!("Failed to create cron job '{}': {}", job.command, e);
            }
        }
    }
    registered
}
