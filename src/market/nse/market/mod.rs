use serde::{Deserialize, Serialize};

use crate::market::nse::{nse_client, NseApiResponse};

/// Grouping key used by /api/allIndices for the headline indices.
pub const BROAD_MARKET_INDICES_KEY: &str = "BROAD MARKET INDICES";
/// Grouping key used by /api/allIndices for the sectoral indices.
pub const SECTORAL_INDICES_KEY: &str = "SECTORAL INDICES";

/// One entry of /api/allIndices. `key` groups indices into categories
/// (broad market, sectoral, thematic, ...).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IndexData {
    pub key: String,
    pub index: String,
    pub last: f64,
    /// Absolute change against the previous close.
    pub variation: f64,
    pub percent_change: f64,
}

/// One entry of /api/live-analysis-variations (gainers or losers).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MoverData {
    pub symbol: String,
    /// Last traded price.
    pub ltp: f64,
    pub per_change: f64,
}

/// One entry of /api/live-analysis-volume-gainers.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VolumeShockerData {
    pub symbol: String,
    pub volume: f64,
    pub week1_avg_volume: f64,
}

impl VolumeShockerData {
    /// Volume change against the one-week average, in percent. `None` when
    /// the average is zero or missing.
    pub fn volume_change_percent(&self) -> Option<f64> {
        if self.week1_avg_volume > 0.0 {
            Some((self.volume / self.week1_avg_volume - 1.0) * 100.0)
        } else {
            None
        }
    }
}

pub type IndicesResponse = NseApiResponse<Vec<IndexData>>;
pub type MoversResponse = NseApiResponse<Vec<MoverData>>;
pub type VolumeShockersResponse = NseApiResponse<Vec<VolumeShockerData>>;

fn filter_by_key(list: Vec<IndexData>, key: &str) -> Vec<IndexData> {
    list.into_iter().filter(|i| i.key == key).collect()
}

pub struct Market {}

impl Market {
    /// All index quotes, every category.
    pub async fn get_all_indices() -> anyhow::Result<Vec<IndexData>> {
        let res: IndicesResponse = nse_client::get_nse_client()
            .await?
            .send_request("/api/allIndices")
            .await?;
        Ok(res.data)
    }

    /// Headline indices (NIFTY 50, NIFTY NEXT 50, ...).
    pub async fn get_broad_market_indices() -> anyhow::Result<Vec<IndexData>> {
        Ok(filter_by_key(
            Self::get_all_indices().await?,
            BROAD_MARKET_INDICES_KEY,
        ))
    }

    /// Sectoral indices (NIFTY BANK, NIFTY IT, ...).
    pub async fn get_sectoral_indices() -> anyhow::Result<Vec<IndexData>> {
        Ok(filter_by_key(
            Self::get_all_indices().await?,
            SECTORAL_INDICES_KEY,
        ))
    }

    pub async fn get_top_gainers() -> anyhow::Result<Vec<MoverData>> {
        let res: MoversResponse = nse_client::get_nse_client()
            .await?
            .send_request("/api/live-analysis-variations?index=gainers")
            .await?;
        Ok(res.data)
    }

    pub async fn get_top_losers() -> anyhow::Result<Vec<MoverData>> {
        // NSE spells the segment "loosers"
        let res: MoversResponse = nse_client::get_nse_client()
            .await?
            .send_request("/api/live-analysis-variations?index=loosers")
            .await?;
        Ok(res.data)
    }

    pub async fn get_volume_shockers() -> anyhow::Result<Vec<VolumeShockerData>> {
        let res: VolumeShockersResponse = nse_client::get_nse_client()
            .await?
            .send_request("/api/live-analysis-volume-gainers")
            .await?;
        Ok(res.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_indices_payload() {
        let body = r#"{
            "data": [
                {"key": "BROAD MARKET INDICES", "index": "NIFTY 50",
                 "last": 24823.15, "variation": 85.30, "percentChange": 0.34},
                {"key": "SECTORAL INDICES", "index": "NIFTY BANK",
                 "last": 55458.85, "variation": -120.45, "percentChange": -0.22}
            ],
            "timestamp": "22-Aug-2026 16:00:00"
        }"#;

        let res: IndicesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(res.data.len(), 2);
        assert_eq!(res.data[0].index, "NIFTY 50");
        assert_eq!(res.data[1].percent_change, -0.22);
        assert_eq!(res.timestamp.as_deref(), Some("22-Aug-2026 16:00:00"));
    }

    #[test]
    fn parses_movers_payload_without_timestamp() {
        let body = r#"{"data": [
            {"symbol": "TATAMOTORS", "ltp": 712.40, "perChange": 4.92},
            {"symbol": "INFY", "ltp": 1540.00, "perChange": 3.10}
        ]}"#;

        let res: MoversResponse = serde_json::from_str(body).unwrap();
        assert_eq!(res.data[0].symbol, "TATAMOTORS");
        assert_eq!(res.data[1].ltp, 1540.00);
        assert!(res.timestamp.is_none());
    }

    #[test]
    fn filters_indices_by_category_key() {
        let body = r#"{"data": [
            {"key": "BROAD MARKET INDICES", "index": "NIFTY 50",
             "last": 1.0, "variation": 0.0, "percentChange": 0.0},
            {"key": "SECTORAL INDICES", "index": "NIFTY IT",
             "last": 1.0, "variation": 0.0, "percentChange": 0.0},
            {"key": "SECTORAL INDICES", "index": "NIFTY PHARMA",
             "last": 1.0, "variation": 0.0, "percentChange": 0.0}
        ]}"#;
        let res: IndicesResponse = serde_json::from_str(body).unwrap();

        let sectors = filter_by_key(res.data.clone(), SECTORAL_INDICES_KEY);
        assert_eq!(sectors.len(), 2);
        assert!(sectors.iter().all(|s| s.key == SECTORAL_INDICES_KEY));

        let broad = filter_by_key(res.data, BROAD_MARKET_INDICES_KEY);
        assert_eq!(broad.len(), 1);
        assert_eq!(broad[0].index, "NIFTY 50");
    }

    #[test]
    fn volume_change_percent_derivation() {
        let shocker: VolumeShockerData = serde_json::from_str(
            r#"{"symbol": "IDEA", "volume": 3000000.0, "week1AvgVolume": 1200000.0}"#,
        )
        .unwrap();
        let pct = shocker.volume_change_percent().unwrap();
        assert!((pct - 150.0).abs() < 1e-9);

        let zero_avg = VolumeShockerData {
            symbol: "X".to_string(),
            volume: 100.0,
            week1_avg_volume: 0.0,
        };
        assert!(zero_avg.volume_change_percent().is_none());
    }
}
