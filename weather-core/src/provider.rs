use crate::{
    RuntimeConfig,
    error::ProviderError,
    model::{Observation, TemperatureUnit},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Outcome of a provider call that completed at the HTTP level.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderReply {
    Observed(Observation),
    /// The provider answered with a non-success status (unknown city, bad key, outage).
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(
        &self,
        city: &str,
        unit: TemperatureUnit,
    ) -> Result<ProviderReply, ProviderError>;
}

/// Construct the OpenWeather provider from the relay config.
pub fn provider_from_config(config: &RuntimeConfig) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(
        config.api_key.clone(),
        config.provider.base_url.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_uses_configured_endpoint() {
        let mut cfg = RuntimeConfig {
            api_key: "KEY".into(),
            default_location: "London".into(),
            ..RuntimeConfig::default()
        };
        cfg.provider.base_url = "http://localhost:9999".into();

        let provider = provider_from_config(&cfg);
        let debug = format!("{provider:?}");
        assert!(debug.contains("http://localhost:9999"));
    }

    #[test]
    fn provider_debug_hides_api_key() {
        let cfg = RuntimeConfig {
            api_key: "SECRET_KEY".into(),
            ..RuntimeConfig::default()
        };

        let debug = format!("{:?}", provider_from_config(&cfg));
        assert!(!debug.contains("SECRET_KEY"));
    }
}
