//! Client-side view state: loading, error and result, and how each renders.

use std::fmt::Write as _;

use tracing::warn;
use weather_core::WeatherResult;

use crate::relay_client::{FetchError, RelayClient};

pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name.";
pub const OFFLINE_BANNER: &str =
    "Weather API is offline! showing dummy data from a default location.";
pub const CONNECTIVITY_MESSAGE: &str =
    "Failed to fetch weather data. Please ensure the backend server is running and try again.";
pub const WELCOME_MESSAGE: &str = "Enter a city name above to get started!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<WeatherResult>,
}

impl ViewState {
    pub fn offline_banner(&self) -> Option<&'static str> {
        self.result.as_ref().filter(|r| r.offline).map(|_| OFFLINE_BANNER)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(banner) = self.offline_banner() {
            let _ = writeln!(out, "[!] {banner}");
        }

        if self.loading {
            let _ = writeln!(out, "Loading weather data...");
        }

        if let Some(error) = &self.error {
            let _ = writeln!(out, "Error! {error}");
        }

        match &self.result {
            Some(result) if !self.loading => render_result(&mut out, result),
            None if !self.loading && self.error.is_none() => {
                let _ = writeln!(out, "{WELCOME_MESSAGE}");
            }
            _ => {}
        }

        out
    }
}

fn render_result(out: &mut String, result: &WeatherResult) {
    match &result.country {
        Some(country) => {
            let _ = writeln!(out, "{}, {country}", result.city);
        }
        None => {
            let _ = writeln!(out, "{}", result.city);
        }
    }

    let _ = writeln!(out, "  Temperature: {}", result.temperature);
    let _ = writeln!(out, "  Conditions:  {}", result.description);
    if result.show_humidity {
        let _ = writeln!(out, "  Humidity:    {}", result.humidity);
    }
    let _ = writeln!(out, "  Wind Speed:  {}", result.wind_speed);
    let _ = writeln!(out, "  Icon:        {}", result.icon);
}

/// Drives one form submission at a time against the relay.
#[derive(Debug)]
pub struct WeatherApp {
    client: RelayClient,
    state: ViewState,
}

impl WeatherApp {
    pub fn new(client: RelayClient) -> Self {
        Self { client, state: ViewState::default() }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn client(&self) -> &RelayClient {
        &self.client
    }

    /// Starts a submission. Returns the city to fetch, or `None` when the
    /// input was blank and no request should be made.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let city = input.trim();
        if city.is_empty() {
            self.state.error = Some(EMPTY_CITY_MESSAGE.to_string());
            return None;
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.result = None;
        Some(city.to_string())
    }

    pub fn finish(&mut self, outcome: Result<WeatherResult, FetchError>) {
        match outcome {
            Ok(result) => self.state.result = Some(result),
            Err(FetchError::Relay { status, message }) => {
                warn!(status, message = %message, "Relay returned an error");
                self.state.error = Some(format!("Error: {message}"));
            }
            Err(err) => {
                warn!(error = %err, "Error fetching weather from relay");
                self.state.error = Some(CONNECTIVITY_MESSAGE.to_string());
            }
        }

        self.state.loading = false;
    }

    pub async fn submit(&mut self, input: &str) -> &ViewState {
        if let Some(city) = self.begin(input) {
            let outcome = self.client.get_weather(&city).await;
            self.finish(outcome);
        }

        &self.state
    }
}
