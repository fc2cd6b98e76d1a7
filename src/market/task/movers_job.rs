use tracing::{debug, info};

use crate::market::model::market::movers::{MarketMoversModel, MoverType};
use crate::market::nse::market::Market;

/// Only the top entries of each list are kept.
pub const TOP_MOVERS_LIMIT: usize = 5;

/// Fetch top gainers and losers and upsert both under their mover type.
pub async fn sync_movers() -> anyhow::Result<()> {
    // fetch before touching the model so a feed failure never reaches the DB
    let gainers = Market::get_top_gainers().await?;
    debug!("fetched {} gainers", gainers.len());
    let model = MarketMoversModel::new();
    let kept = gainers.len().min(TOP_MOVERS_LIMIT);
    let gainer_rows = model.upsert(&gainers[..kept], MoverType::Gainer).await?;

    let losers = Market::get_top_losers().await?;
    debug!("fetched {} losers", losers.len());
    let kept = losers.len().min(TOP_MOVERS_LIMIT);
    let loser_rows = model.upsert(&losers[..kept], MoverType::Loser).await?;

    info!(
        "market movers updated, {} gainer rows, {} loser rows",
        gainer_rows, loser_rows
    );
    Ok(())
}
