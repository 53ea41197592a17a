use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    LookupError, LookupPayload,
    model::LookupBody,
};

use super::LookupProvider;

/// Client for `GET {base_url}/weather/{location}`.
#[derive(Debug, Clone)]
pub struct HttpLookupProvider {
    base_url: Url,
    http: Client,
}

impl HttpLookupProvider {
    pub fn new(base_url: &Url) -> Result<Self, LookupError> {
        Self::with_timeout(base_url, None)
    }

    /// Requests run without an upper bound unless `timeout` is set.
    pub fn with_timeout(base_url: &Url, timeout: Option<Duration>) -> Result<Self, LookupError> {
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LookupError::Transport)?;

        Ok(Self { base_url: base_url.clone(), http })
    }

    /// The location is pushed as one percent-encoded segment.
    pub fn lookup_url(&self, location: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("weather").push(location);
        }
        url
    }
}

#[async_trait]
impl LookupProvider for HttpLookupProvider {
    async fn fetch(&self, location: &str) -> Result<LookupPayload, LookupError> {
        let url = self.lookup_url(location);
        tracing::debug!(%url, "sending lookup request");

        let res = self.http.get(url).send().await.map_err(LookupError::Transport)?;

        let status = res.status();
        let body = res.text().await.map_err(LookupError::Transport)?;

        if !status.is_success() {
            tracing::warn!(%status, "lookup endpoint returned non-success status");
            return Err(LookupError::Status { status: status.as_u16(), body: truncate_body(&body) });
        }

        let parsed: LookupBody =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(LookupError::Application(error.message));
        }

        match (parsed.weather, parsed.image) {
            (Some(weather), Some(image)) => Ok(LookupPayload { weather, image }),
            (None, _) => Err(LookupError::Decode("response has no `weather` block".into())),
            (_, None) => Err(LookupError::Decode("response has no `image` block".into())),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
