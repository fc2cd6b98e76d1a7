use anyhow::Result;
use rbatis::rbdc::db::ExecResult;
use rbatis::{crud, RBatis};
use serde::{Deserialize, Serialize};

use crate::app_config::db::get_db_client;
use crate::market::nse::market::IndexData;

/// Row in the `indices` table (NIFTY 50, SENSEX-style headline indices).
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct IndexSnapshotEntity {
    pub name: String,
    pub current_value: f64,
    pub change: f64,
    pub percent_change: f64,
    pub last_updated: Option<String>,
}

crud!(IndexSnapshotEntity {}, "indices");
impl IndexSnapshotEntity {
    pub async fn fetch_list(
        executor: &dyn rbatis::executor::Executor,
    ) -> std::result::Result<Vec<IndexSnapshotEntity>, rbatis::rbdc::Error> {
        IndexSnapshotEntity::select_by_map(
            executor,
            rbs::Value::Map(rbs::value::map::ValueMap::new()),
        )
        .await
    }
}

pub struct IndicesModel {
    db: RBatis,
}

impl IndicesModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client().clone(),
        }
    }

    pub async fn create_table(&self) -> Result<ExecResult> {
        let create_table_sql = "CREATE TABLE IF NOT EXISTS indices (
            id SERIAL PRIMARY KEY,
            name VARCHAR(50) UNIQUE NOT NULL,
            current_value NUMERIC(12, 2),
            change NUMERIC(12, 2),
            percent_change NUMERIC(5, 2),
            last_updated TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
        )";
        let res = self.db.exec(create_table_sql, vec![]).await?;
        Ok(res)
    }

    /// Insert each index level, overwriting the previous snapshot for the
    /// same index name.
    pub async fn upsert(&self, list: &[IndexData]) -> Result<u64> {
        let mut affected = 0u64;
        for index in list {
            let res = self
                .db
                .exec(
                    "INSERT INTO indices (name, current_value, change, percent_change, last_updated)
                     VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
                     ON CONFLICT (name) DO UPDATE
                     SET current_value = EXCLUDED.current_value,
                         change = EXCLUDED.change,
                         percent_change = EXCLUDED.percent_change,
                         last_updated = CURRENT_TIMESTAMP",
                    vec![
                        index.index.clone().into(),
                        index.last.into(),
                        index.variation.into(),
                        index.percent_change.into(),
                    ],
                )
                .await?;
            affected += res.rows_affected;
        }
        Ok(affected)
    }

    pub async fn get_all(&self) -> Result<Vec<IndexSnapshotEntity>> {
        let results: Vec<IndexSnapshotEntity> =
            IndexSnapshotEntity::fetch_list(&self.db).await?;
        Ok(results)
    }
}
