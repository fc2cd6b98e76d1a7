use tracing::{error, info, span, Instrument, Level};

pub mod indices_job;
pub mod movers_job;
pub mod sectors_job;
pub mod volume_job;

/** Sync every data category. A failure in one category is logged and the
remaining categories still run. **/
pub async fn run_sync_data_job() -> Result<(), anyhow::Error> {
    async {
        if let Err(e) = indices_job::sync_indices().await {
            error!("error updating indices: {}", e);
        }
        if let Err(e) = movers_job::sync_movers().await {
            error!("error updating market movers: {}", e);
        }
        if let Err(e) = sectors_job::sync_sectors().await {
            error!("error updating sectoral performance: {}", e);
        }
        if let Err(e) = volume_job::sync_volume_shockers().await {
            error!("error updating volume shockers: {}", e);
        }

        info!("all data updates finished");
        Ok(())
    }
    .instrument(span!(Level::DEBUG, "run_sync_data_job"))
    .await
}
