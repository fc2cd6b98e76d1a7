use std::env;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use nse_sync::app_config::db::init_db;
use nse_sync::app_config::log::setup_logging;
use nse_sync::market::{model, task};

/// Pulls NSE market summary data (indices, movers, sectors, volume shockers)
/// and upserts it into PostgreSQL.
#[derive(Parser, Debug)]
#[command(name = "nse_sync", version)]
struct Args {
    /// Cron expression for periodic sync. Without it the job runs once and
    /// exits (deployments that already have an external cron).
    #[arg(long)]
    cron: Option<String>,

    /// Skip the CREATE TABLE IF NOT EXISTS pass on startup.
    #[arg(long)]
    skip_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    setup_logging().await?;

    let args = Args::parse();

    info!(
        "starting NSE market data sync at {}",
        chrono::Utc::now().to_rfc3339()
    );
    init_db().await?;
    info!("database connection successful");

    if !args.skip_schema {
        model::ensure_schema().await?;
    }

    let cron = args.cron.or_else(|| env::var("SYNC_CRON").ok());
    match cron {
        None => {
            task::run_sync_data_job().await?;
            info!("sync finished");
        }
        Some(expr) => {
            let mut scheduler = JobScheduler::new().await?;
            scheduler
                .add(Job::new_async(expr.as_str(), |_uuid, _lock| {
                    Box::pin(async {
                        if let Err(e) = task::run_sync_data_job().await {
                            error!("scheduled sync failed: {}", e);
                        }
                    })
                })?)
                .await?;
            scheduler.start().await?;
            info!("scheduler started with cron '{}'", expr);

            tokio::signal::ctrl_c().await?;
            info!("shutting down");
            scheduler.shutdown().await?;
        }
    }

    Ok(())
}
