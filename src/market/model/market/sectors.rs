use anyhow::Result;
use rbatis::rbdc::db::ExecResult;
use rbatis::{crud, RBatis};
use serde::{Deserialize, Serialize};

use crate::app_config::db::get_db_client;
use crate::market::nse::market::IndexData;

/// Row in the `sectoral_performance` table.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct SectorPerformanceEntity {
    pub sector_name: String,
    pub percent_change: f64,
    pub last_updated: Option<String>,
}

crud!(SectorPerformanceEntity {}, "sectoral_performance");
impl SectorPerformanceEntity {
    pub async fn fetch_list(
        executor: &dyn rbatis::executor::Executor,
    ) -> std::result::Result<Vec<SectorPerformanceEntity>, rbatis::rbdc::Error> {
        SectorPerformanceEntity::select_by_map(
            executor,
            rbs::Value::Map(rbs::value::map::ValueMap::new()),
        )
        .await
    }
}

pub struct SectoralPerformanceModel {
    db: RBatis,
}

impl SectoralPerformanceModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client().clone(),
        }
    }

    pub async fn create_table(&self) -> Result<ExecResult> {
        let create_table_sql = "CREATE TABLE IF NOT EXISTS sectoral_performance (
            id SERIAL PRIMARY KEY,
            sector_name VARCHAR(100) UNIQUE NOT NULL,
            percent_change NUMERIC(5, 2),
            last_updated TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
        )";
        let res = self.db.exec(create_table_sql, vec![]).await?;
        Ok(res)
    }

    /// Sector rows come from the sectoral entries of the index feed.
    pub async fn upsert(&self, list: &[IndexData]) -> Result<u64> {
        let mut affected = 0u64;
        for sector in list {
            let res = self
                .db
                .exec(
                    "INSERT INTO sectoral_performance (sector_name, percent_change, last_updated)
                     VALUES (?, ?, CURRENT_TIMESTAMP)
                     ON CONFLICT (sector_name) DO UPDATE
                     SET percent_change = EXCLUDED.percent_change,
                         last_updated = CURRENT_TIMESTAMP",
                    vec![sector.index.clone().into(), sector.percent_change.into()],
                )
                .await?;
            affected += res.rows_affected;
        }
        Ok(affected)
    }

    pub async fn get_all(&self) -> Result<Vec<SectorPerformanceEntity>> {
        let results: Vec<SectorPerformanceEntity> =
            SectorPerformanceEntity::fetch_list(&self.db).await?;
        Ok(results)
    }
}
