use serde::{Deserialize, Serialize};

pub mod market;
pub mod nse_client;

/// Envelope most NSE endpoints wrap their payload in.
#[derive(Serialize, Deserialize, Debug)]
pub struct NseApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub timestamp: Option<String>,
}
