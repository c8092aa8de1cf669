use crate::{Config, Coordinate, HourReading, error::ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{fmt::Debug, time::Duration};

pub mod noaa;
pub mod offline;
pub mod openmeteo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Noaa,
    OpenMeteo,
    Offline,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Noaa => "NOAA",
            ProviderId::OpenMeteo => "Open-Meteo",
            ProviderId::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of the current hour's weather at a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn fetch(&self, coord: Coordinate) -> Result<HourReading, ProviderError>;
}

/// Shared HTTP client carrying the configured timeout and identification.
pub fn http_client(config: &Config) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))
}

/// GET `request`, reject non-success statuses, and decode the body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let res = request.send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(ProviderError::protocol(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}
