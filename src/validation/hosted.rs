// Hosted moderation API client.
//
// POSTs the text to a profanity screening endpoint and maps the response
// into a ModerationVerdict. Transport and HTTP failures surface as
// ExternalService errors; connectivity problems are never swallowed.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{ModerationVerdict, ReferenceChecker};
use crate::error::{Error, Result};

/// Reference checker backed by a hosted moderation HTTP API.
pub struct HostedModerationChecker {
    client: Client,
    endpoint: String,
    api_key: String,
    /// Words the service should be told not to flag.
    exclude: Vec<String>,
    /// Replacement character the service should mask with.
    fill_char: Option<char>,
}

impl HostedModerationChecker {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            exclude: Vec::new(),
            fill_char: None,
        }
    }

    /// Ask the service to skip these words when screening.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Ask the service to mask with this character instead of its default.
    pub fn with_fill_char(mut self, fill_char: char) -> Self {
        self.fill_char = Some(fill_char);
        self
    }
}

#[async_trait]
impl ReferenceChecker for HostedModerationChecker {
    async fn screen(&self, text: &str) -> Result<ModerationVerdict> {
        let request = ScreenRequest {
            text,
            exclude: &self.exclude,
            fill_char: self.fill_char,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                Error::ExternalService(format!("request to moderation service failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ExternalService(format!(
                "moderation service returned {status}: {body}"
            )));
        }

        let parsed: ScreenResponse = response.json().await.map_err(|err| {
            Error::ExternalService(format!("failed to parse moderation response: {err}"))
        })?;

        debug!(
            bad_words = parsed.bad_words.len(),
            "Screened text against moderation service"
        );

        Ok(ModerationVerdict {
            bad_words: parsed.bad_words,
            cleaned_text: parsed.cleaned_text,
        })
    }
}

// --- Moderation API request/response types ---

#[derive(Serialize)]
struct ScreenRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    exclude: &'a [String],
    #[serde(rename = "fillChar", skip_serializing_if = "Option::is_none")]
    fill_char: Option<char>,
}

#[derive(Deserialize)]
struct ScreenResponse {
    #[serde(rename = "badWords")]
    bad_words: Vec<String>,
    #[serde(rename = "cleanedText")]
    cleaned_text: String,
}
