//! The relay's weather-fetch operation: call the provider, normalize a live
//! reading, or fall back to the configured dummy record when the provider
//! rejects the request.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    RuntimeConfig,
    error::RelayError,
    model::{Observation, TemperatureUnit, WeatherQuery, WeatherResult},
    provider::{ProviderReply, WeatherProvider},
};

const ICON_BASE_URL: &str = "http://openweathermap.org/img/wn";
const MPS_TO_KMH: f64 = 3.6;

#[derive(Debug, Clone)]
pub struct WeatherRelay {
    config: Arc<RuntimeConfig>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherRelay {
    pub fn new(config: Arc<RuntimeConfig>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { config, provider }
    }

    #[instrument(skip(self, query), fields(city = %query.city()))]
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResult, RelayError> {
        let unit = self.config.temperature_unit();

        match self.provider.current(query.city(), unit).await? {
            ProviderReply::Observed(observation) => {
                Ok(normalize(observation, unit, self.config.show_humidity))
            }
            ProviderReply::Rejected { status, body } => {
                warn!(status, body = %body, "Weather provider rejected request, serving dummy data");
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> Result<WeatherResult, RelayError> {
        let record = self
            .config
            .default_dummy_record()
            .ok_or_else(|| RelayError::MissingDummyRecord(self.config.default_location.clone()))?;

        info!(location = %record.city, "Serving dummy record");
        Ok(WeatherResult::from_dummy(record, self.config.show_humidity))
    }
}

/// Shapes a live provider reading into the client-facing result.
pub fn normalize(
    observation: Observation,
    unit: TemperatureUnit,
    show_humidity: bool,
) -> WeatherResult {
    WeatherResult {
        city: observation.city,
        country: observation.country,
        temperature: format_temperature(observation.temperature, unit),
        description: observation.description,
        humidity: format!("{}%", observation.humidity),
        show_humidity,
        wind_speed: format_wind_speed(observation.wind_speed_mps),
        icon: icon_url(&observation.icon),
        offline: false,
    }
}

pub fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", round_half_up(value), unit.suffix())
}

/// m/s in, whole km/h out.
pub fn format_wind_speed(mps: f64) -> String {
    format!("{} km/h", round_half_up(mps * MPS_TO_KMH))
}

pub fn icon_url(code: &str) -> String {
    format!("{ICON_BASE_URL}/{code}@2x.png")
}

/// Nearest integer, halves toward positive infinity (-2.5 -> -2, 2.5 -> 3).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
