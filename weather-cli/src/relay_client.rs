use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use weather_core::WeatherResult;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The relay answered with a structured `{"message": ...}` error.
    #[error("{message}")]
    Relay { status: u16, message: String },

    #[error("Weather relay returned HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to reach weather relay: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: String,
}

/// HTTP client for the relay's `/api/weather` endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub async fn get_weather(&self, city: &str) -> Result<WeatherResult, FetchError> {
        let url = format!("{}/api/weather", self.base_url);
        debug!(url = %url, city, "Requesting weather from relay");

        let res = self.http.get(&url).query(&[("city", city)]).send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res.json().await?);
        }

        match res.json::<ErrorPayload>().await {
            Ok(payload) => Err(FetchError::Relay {
                status: status.as_u16(),
                message: payload.message,
            }),
            Err(_) => Err(FetchError::UnexpectedStatus(status.as_u16())),
        }
    }
}
