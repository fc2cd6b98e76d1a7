use tracing::{debug, info};

use crate::market::model::market::volume::VolumeShockersModel;
use crate::market::nse::market::Market;

/// Fetch volume shockers and overwrite the stored rows per ticker.
pub async fn sync_volume_shockers() -> anyhow::Result<()> {
    let shockers = Market::get_volume_shockers().await?;
    debug!("fetched {} volume shockers", shockers.len());

    let affected = VolumeShockersModel::new().upsert(&shockers).await?;
    info!("volume shockers updated, {} rows", affected);
    Ok(())
}
