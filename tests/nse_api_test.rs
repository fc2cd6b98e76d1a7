use anyhow::Result;
use dotenv::dotenv;

use nse_sync::market::nse::market::Market;

// Live API tests. They need network access to nseindia.com, so they are
// ignored by default: `cargo test -- --ignored` to run them.

#[tokio::test]
#[ignore]
async fn test_get_all_indices() -> Result<()> {
    dotenv().ok();

    let indices = Market::get_all_indices().await?;
    println!("fetched {} indices", indices.len());
    assert!(!indices.is_empty());
    assert!(indices.iter().any(|i| i.index == "NIFTY 50"));
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_get_top_gainers_and_losers() -> Result<()> {
    dotenv().ok();

    let gainers = Market::get_top_gainers().await?;
    println!("gainers: {:?}", gainers);
    assert!(!gainers.is_empty());

    let losers = Market::get_top_losers().await?;
    println!("losers: {:?}", losers);
    assert!(!losers.is_empty());
    Ok(())
}

#[tokio::test]
#[ignore]
async fn test_get_volume_shockers() -> Result<()> {
    dotenv().ok();

    let shockers = Market::get_volume_shockers().await?;
    println!("volume shockers: {:?}", shockers);
    assert!(!shockers.is_empty());
    Ok(())
}
