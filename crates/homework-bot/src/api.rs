//! Client for the homework status API.

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::{debug, trace};
use url::Url;

use crate::error::FetchError;

/// Authenticated client for the `homework_statuses` endpoint.
#[derive(Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Create a new client for the given endpoint and OAuth token.
    pub fn new(endpoint: Url, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            token: token.into(),
        }
    }

    /// Fetch the statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the decoded JSON object without interpreting it.
    pub async fn fetch(&self, from_date: i64) -> Result<Map<String, Value>, FetchError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from_date", &from_date.to_string());

        trace!(url = %url, "Requesting homework statuses");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        match serde_json::from_str::<Value>(&body)? {
            Value::Object(map) => {
                debug!(from_date, "Received homework statuses");
                Ok(map)
            }
            _ => Err(FetchError::NotAnObject),
        }
    }
}
