//! Core library for the weather relay.
//!
//! This crate defines:
//! - Runtime configuration loaded once at relay startup
//! - Abstraction over the upstream weather provider (OpenWeather)
//! - Shared domain models (queries, results, dummy records)
//! - The relay's fetch operation: normalization and offline fallback
//!
//! It is used by `weather-relay` (server) and `weather-cli` (client models).

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod relay;

pub use config::{ProviderSettings, RuntimeConfig, ServerSettings};
pub use error::{ProviderError, QueryError, RelayError};
pub use model::{DummyRecord, Observation, TemperatureUnit, WeatherQuery, WeatherResult};
pub use provider::{ProviderReply, WeatherProvider, openweather::OpenWeatherProvider};
pub use relay::WeatherRelay;
