use anyhow::Result;
use rbatis::rbdc::db::ExecResult;
use rbatis::{crud, RBatis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app_config::db::get_db_client;
use crate::market::nse::market::VolumeShockerData;

/// Row in the `volume_shockers` table.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct VolumeShockerEntity {
    pub ticker: String,
    pub volume_change_percent: f64,
    pub last_updated: Option<String>,
}

crud!(VolumeShockerEntity {}, "volume_shockers");
impl VolumeShockerEntity {
    pub async fn fetch_list(
        executor: &dyn rbatis::executor::Executor,
    ) -> std::result::Result<Vec<VolumeShockerEntity>, rbatis::rbdc::Error> {
        VolumeShockerEntity::select_by_map(
            executor,
            rbs::Value::Map(rbs::value::map::ValueMap::new()),
        )
        .await
    }
}

pub struct VolumeShockersModel {
    db: RBatis,
}

impl VolumeShockersModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client().clone(),
        }
    }

    pub async fn create_table(&self) -> Result<ExecResult> {
        let create_table_sql = "CREATE TABLE IF NOT EXISTS volume_shockers (
            id SERIAL PRIMARY KEY,
            ticker VARCHAR(50) UNIQUE NOT NULL,
            volume_change_percent NUMERIC(10, 2),
            last_updated TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
        )";
        let res = self.db.exec(create_table_sql, vec![]).await?;
        Ok(res)
    }

    /// Rows without a computable volume change (zero weekly average) are
    /// skipped.
    pub async fn upsert(&self, list: &[VolumeShockerData]) -> Result<u64> {
        let mut affected = 0u64;
        for shocker in list {
            let percent = match shocker.volume_change_percent() {
                Some(p) => p,
                None => {
                    debug!("skipping {}: no weekly average volume", shocker.symbol);
                    continue;
                }
            };
            let res = self
                .db
                .exec(
                    "INSERT INTO volume_shockers (ticker, volume_change_percent, last_updated)
                     VALUES (?, ?, CURRENT_TIMESTAMP)
                     ON CONFLICT (ticker) DO UPDATE
                     SET volume_change_percent = EXCLUDED.volume_change_percent,
                         last_updated = CURRENT_TIMESTAMP",
                    vec![shocker.symbol.clone().into(), percent.into()],
                )
                .await?;
            affected += res.rows_affected;
        }
        Ok(affected)
    }

    pub async fn get_all(&self) -> Result<Vec<VolumeShockerEntity>> {
        let results: Vec<VolumeShockerEntity> =
            VolumeShockerEntity::fetch_list(&self.db).await?;
        Ok(results)
    }
}
