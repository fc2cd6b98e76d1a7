use tracing::{debug, info};

use crate::market::model::market::indices::IndicesModel;
use crate::market::nse::market::Market;

/// Fetch the headline index levels and overwrite the stored snapshots.
pub async fn sync_indices() -> anyhow::Result<()> {
    let indices = Market::get_broad_market_indices().await?;
    debug!("fetched {} index quotes", indices.len());

    let affected = IndicesModel::new().upsert(&indices).await?;
    info!("indices updated, {} rows", affected);
    Ok(())
}
