pub mod market;

use anyhow::Result;
use tracing::info;

use crate::market::model::market::indices::IndicesModel;
use crate::market::model::market::movers::MarketMoversModel;
use crate::market::model::market::sectors::SectoralPerformanceModel;
use crate::market::model::market::volume::VolumeShockersModel;

/// Create every table this service writes to. `CREATE TABLE IF NOT EXISTS`
/// throughout, safe to run on every start.
pub async fn ensure_schema() -> Result<()> {
    IndicesModel::new().create_table().await?;
    MarketMoversModel::new().create_table().await?;
    SectoralPerformanceModel::new().create_table().await?;
    VolumeShockersModel::new().create_table().await?;
    info!("database tables are set up");
    Ok(())
}
