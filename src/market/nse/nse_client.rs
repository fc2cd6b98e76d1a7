use std::env;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::app_error::AppError;

const DEFAULT_BASE_URL: &str = "https://www.nseindia.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;
// The NSE API rejects clients that do not look like a browser.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

static NSE_CLIENT: OnceCell<NseClient> = OnceCell::const_new();

pub(crate) struct NseClient {
    client: Client,
    base_url: String,
}

impl NseClient {
    fn new() -> Result<Self, AppError> {
        let base_url =
            env::var("NSE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        if let Ok(referer) = HeaderValue::from_str(&base_url) {
            headers.insert(REFERER, referer);
        }

        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(NseClient { client, base_url })
    }

    /// The API only answers once the session cookies from the site root are
    /// present in the cookie store.
    async fn prime(self) -> Result<Self, AppError> {
        let response = self.client.get(&self.base_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::NseApiError(format!(
                "priming session against {} returned {}",
                self.base_url, status
            )));
        }
        debug!("nse session primed against {}", self.base_url);
        Ok(self)
    }

    pub(crate) async fn send_request<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        let status_code = response.status();
        let response_body = response.text().await?;
        debug!("path: {}, nse response: {} bytes", path, response_body.len());

        if status_code == StatusCode::OK {
            let result: T = serde_json::from_str(&response_body)
                .map_err(|e| AppError::NseApiError(format!("decoding {}: {}", path, e)))?;
            Ok(result)
        } else {
            Err(AppError::NseApiError(format!(
                "request to {} failed with status {}",
                path, status_code
            )))
        }
    }
}

/// Shared primed client. Building it once per process keeps the session
/// cookies across all category fetches.
pub(crate) async fn get_nse_client() -> Result<&'static NseClient, AppError> {
    NSE_CLIENT
        .get_or_try_init(|| async { NseClient::new()?.prime().await })
        .await
}
