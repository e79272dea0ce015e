//! Network fetching with timeout.

use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
///
/// Gives up with [`FetchError::Timeout`] after `FETCH_TIMEOUT_MS`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let request = async {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        if !resp.ok() {
            return Err(FetchError::HttpError(resp.status()));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
    };

    match select(pin!(request), pin!(TimeoutFuture::new(FETCH_TIMEOUT_MS))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout),
    }
}
