use tracing::{debug, info};

use crate::market::model::market::sectors::SectoralPerformanceModel;
use crate::market::nse::market::Market;

/// Fetch the sectoral indices and overwrite the per-sector performance rows.
pub async fn sync_sectors() -> anyhow::Result<()> {
    let sectors = Market::get_sectoral_indices().await?;
    debug!("fetched {} sectoral indices", sectors.len());

    let affected = SectoralPerformanceModel::new().upsert(&sectors).await?;
    info!("sectoral performance updated, {} rows", affected);
    Ok(())
}
