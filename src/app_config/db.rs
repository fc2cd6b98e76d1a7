use std::env;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use rbatis::RBatis;
use rbdc_pg::driver::PgDriver;

static DB_CLIENT: OnceCell<RBatis> = OnceCell::new();

/// Connect to PostgreSQL using `DATABASE_URL` and store the client for the
/// rest of the process. A failure here must abort the run.
pub async fn init_db() -> Result<&'static RBatis> {
    if let Some(rb) = DB_CLIENT.get() {
        return Ok(rb);
    }
    let url = env::var("DATABASE_URL").map_err(|_| anyhow!("DATABASE_URL is not set"))?;

    let rb = RBatis::new();
    rb.link(PgDriver {}, &url)
        .await
        .map_err(|e| anyhow!("error connecting to the database: {}", e))?;
    rb.get_pool()?.set_max_open_conns(10).await;

    DB_CLIENT
        .set(rb)
        .map_err(|_| anyhow!("DB_CLIENT already initialized"))?;
    Ok(DB_CLIENT.get().expect("DB_CLIENT is not initialized"))
}

pub fn get_db_client() -> &'static RBatis {
    DB_CLIENT.get().expect("DB_CLIENT is not initialized")
}
