use crate::{Config, LookupError, LookupPayload, provider::http::HttpLookupProvider};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod http;

pub const PRODUCTION_BASE_URL: &str = "https://weather-api-py.vercel.app";
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

/// Known deployments of the lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndpointId {
    #[default]
    Production,
    Development,
}

impl EndpointId {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointId::Production => "production",
            EndpointId::Development => "development",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            EndpointId::Production => PRODUCTION_BASE_URL,
            EndpointId::Development => DEVELOPMENT_BASE_URL,
        }
    }

    pub const fn all() -> &'static [EndpointId] {
        &[EndpointId::Production, EndpointId::Development]
    }
}

impl std::fmt::Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EndpointId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "production" | "prod" => Ok(EndpointId::Production),
            "development" | "dev" => Ok(EndpointId::Development),
            _ => Err(anyhow::anyhow!(
                "Unknown endpoint '{value}'. Supported endpoints: production, development."
            )),
        }
    }
}

/// Source of combined weather and image data for a location.
#[async_trait]
pub trait LookupProvider: Send + Sync + Debug {
    async fn fetch(&self, location: &str) -> Result<LookupPayload, LookupError>;
}

/// Construct the HTTP provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn LookupProvider>> {
    let base_url = config.resolved_base_url()?;
    let provider = HttpLookupProvider::with_timeout(&base_url, config.timeout())?;
    Ok(Box::new(provider))
}
