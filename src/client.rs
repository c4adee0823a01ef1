//! HTTP client for the measurement conversion service
//!
//! Each operation issues exactly one GET and folds the response, or the lack
//! of one, into an [`Outcome`]. No retries and no timeout beyond reqwest's
//! defaults.

use crate::constants::*;
use crate::error::{RequestError, RequestResult};
use crate::types::{HistoryEntry, Outcome, Payload, ServiceErrorBody};
use crate::utils::normalize_base_url;
use serde_json::Value;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct RequestHandler {
    client: reqwest::Client,
    base_url: String,
}

impl RequestHandler {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Conversion endpoint with `raw_input` percent-encoded into the `input` parameter
    pub fn convert_url(&self, raw_input: &str) -> String {
        format!(
            "{}{}?input={}",
            self.base_url,
            CONVERT_PATH,
            urlencoding::encode(raw_input)
        )
    }

    pub fn history_url(&self) -> String {
        format!("{}{}", self.base_url, HISTORY_PATH)
    }

    /// Convert one measurement string. Callers validate with
    /// `ConversionRequest` first; an empty string is never sent.
    pub async fn convert(&self, raw_input: &str) -> Outcome {
        match self.try_convert(raw_input).await {
            Ok(value) => Outcome::Success(Payload::Conversion(value)),
            Err(e) => e.into(),
        }
    }

    pub async fn fetch_history(&self) -> Outcome {
        match self.try_fetch_history().await {
            Ok(entries) if entries.is_empty() => {
                Outcome::Success(Payload::Message(MSG_NO_HISTORY.to_string()))
            }
            Ok(entries) => Outcome::Success(Payload::History(entries)),
            Err(e) => e.into(),
        }
    }

    async fn try_convert(&self, raw_input: &str) -> RequestResult<Value> {
        let url = self.convert_url(raw_input);
        let response = self.send(&url).await?;
        let status = response.status();

        if !status.is_success() {
            let reason = match response.json::<ServiceErrorBody>().await {
                Ok(body) => body.reason(),
                Err(e) => {
                    debug!(error = %e, "Error body not decodable");
                    None
                }
            };
            warn!(status = %status, reason = ?reason, "Conversion rejected by service");
            return Err(RequestError::Service(
                reason.unwrap_or_else(|| MSG_CONVERSION_FAILED.to_string()),
            ));
        }

        response.json::<Value>().await.map_err(body_error)
    }

    async fn try_fetch_history(&self) -> RequestResult<Vec<HistoryEntry>> {
        let url = self.history_url();
        let response = self.send(&url).await?;
        let status = response.status();

        if !status.is_success() {
            warn!(status = %status, "History request rejected by service");
            return Err(RequestError::Service(MSG_HISTORY_FAILED.to_string()));
        }

        let entries = response
            .json::<Vec<HistoryEntry>>()
            .await
            .map_err(body_error)?;
        debug!(count = entries.len(), "History received");
        Ok(entries)
    }

    async fn send(&self, url: &str) -> RequestResult<reqwest::Response> {
        debug!(url = %url, "Sending request");
        match self.client.get(url).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "Response received");
                Ok(response)
            }
            Err(e) => {
                warn!(error = %e, url = %url, "Request failed");
                Err(RequestError::Transport(e))
            }
        }
    }
}

/// Body read failures after a 2xx: malformed JSON is the server's fault,
/// a dropped connection is a transport problem.
fn body_error(e: reqwest::Error) -> RequestError {
    if e.is_decode() {
        error!(error = %e, "Failed to decode response body");
        RequestError::Decode(e)
    } else {
        warn!(error = %e, "Failed to read response body");
        RequestError::Transport(e)
    }
}
