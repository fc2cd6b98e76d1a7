use std::fmt;

use anyhow::Result;
use rbatis::rbdc::db::ExecResult;
use rbatis::{crud, RBatis};
use serde::{Deserialize, Serialize};

use crate::app_config::db::get_db_client;
use crate::market::nse::market::MoverData;

/// Whether a mover made the top-gainers or the top-losers list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoverType {
    Gainer,
    Loser,
}

impl MoverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoverType::Gainer => "GAINER",
            MoverType::Loser => "LOSER",
        }
    }
}

impl fmt::Display for MoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row in the `market_movers` table. A ticker can appear once per mover type.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub struct MarketMoverEntity {
    pub ticker: String,
    pub price: f64,
    pub percent_change: f64,
    pub mover_type: String,
    pub last_updated: Option<String>,
}

crud!(MarketMoverEntity {}, "market_movers");
impl MarketMoverEntity {
    pub async fn select_by_type(
        executor: &dyn rbatis::executor::Executor,
        mover_type: &str,
    ) -> std::result::Result<Vec<MarketMoverEntity>, rbatis::rbdc::Error> {
        MarketMoverEntity::select_by_map(executor, rbs::value! {"mover_type": mover_type}).await
    }
}

pub struct MarketMoversModel {
    db: RBatis,
}

impl MarketMoversModel {
    pub fn new() -> Self {
        Self {
            db: get_db_client().clone(),
        }
    }

    pub async fn create_table(&self) -> Result<ExecResult> {
        let create_table_sql = "CREATE TABLE IF NOT EXISTS market_movers (
            id SERIAL PRIMARY KEY,
            ticker VARCHAR(50) NOT NULL,
            price NUMERIC(12, 2),
            percent_change NUMERIC(5, 2),
            mover_type VARCHAR(10) NOT NULL,
            last_updated TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP,
            UNIQUE (ticker, mover_type)
        )";
        let res = self.db.exec(create_table_sql, vec![]).await?;
        Ok(res)
    }

    /// Upsert movers under the given type, keyed on (ticker, mover_type).
    pub async fn upsert(&self, list: &[MoverData], mover_type: MoverType) -> Result<u64> {
        let mut affected = 0u64;
        for mover in list {
            let res = self
                .db
                .exec(
                    "INSERT INTO market_movers (ticker, price, percent_change, mover_type, last_updated)
                     VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
                     ON CONFLICT (ticker, mover_type) DO UPDATE
                     SET price = EXCLUDED.price,
                         percent_change = EXCLUDED.percent_change,
                         last_updated = CURRENT_TIMESTAMP",
                    vec![
                        mover.symbol.clone().into(),
                        mover.ltp.into(),
                        mover.per_change.into(),
                        mover_type.as_str().into(),
                    ],
                )
                .await?;
            affected += res.rows_affected;
        }
        Ok(affected)
    }

    pub async fn get_by_type(&self, mover_type: MoverType) -> Result<Vec<MarketMoverEntity>> {
        let results: Vec<MarketMoverEntity> =
            MarketMoverEntity::select_by_type(&self.db, mover_type.as_str()).await?;
        Ok(results)
    }
}
