//! Application state shared across handlers

use std::sync::Arc;

use weather_core::WeatherRelay;

/// Shared application state. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub relay: Arc<WeatherRelay>,
}

impl AppState {
    pub fn new(relay: WeatherRelay) -> Self {
        Self { relay: Arc::new(relay) }
    }
}
