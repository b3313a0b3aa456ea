use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A validated lookup request: a non-empty, trimmed city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    pub fn new(city: &str) -> Result<Self, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::MissingCity);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Unit system sent upstream and used for the temperature suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Metric,
    Imperial,
}

impl TemperatureUnit {
    pub fn from_fahrenheit_flag(fahrenheit: bool) -> Self {
        if fahrenheit { Self::Imperial } else { Self::Metric }
    }

    /// Value of the provider's `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Metric => "metric",
            TemperatureUnit::Imperial => "imperial",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Metric => "°C",
            TemperatureUnit::Imperial => "°F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the relay hands back to the client, live or from the fallback table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResult {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub show_humidity: bool,
    pub wind_speed: String,
    pub icon: String,
    pub offline: bool,
}

impl WeatherResult {
    /// Copies a configured dummy record verbatim and marks it offline.
    pub fn from_dummy(record: &DummyRecord, show_humidity: bool) -> Self {
        Self {
            city: record.city.clone(),
            country: record.country.clone(),
            temperature: record.temperature.clone(),
            description: record.description.clone(),
            humidity: record.humidity.clone(),
            show_humidity,
            wind_speed: record.wind_speed.clone(),
            icon: record.icon.clone(),
            offline: true,
        }
    }
}

/// Static per-city reading served when the provider rejects a request.
///
/// Example TOML:
/// [[dummyData]]
/// city = "London"
/// temperature = "12°C"
/// description = "light rain"
/// humidity = "81%"
/// windSpeed = "15 km/h"
/// icon = "http://openweathermap.org/img/wn/10d@2x.png"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DummyRecord {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind_speed: String,
    pub icon: String,
}

/// A successful provider reading, still in provider units.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub city: String,
    pub country: Option<String>,
    pub temperature: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed_mps: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_city() {
        let query = WeatherQuery::new("  London ").expect("city is present");
        assert_eq!(query.city(), "London");
    }

    #[test]
    fn query_rejects_blank_city() {
        assert_eq!(WeatherQuery::new(""), Err(QueryError::MissingCity));
        assert_eq!(WeatherQuery::new(" \t "), Err(QueryError::MissingCity));
    }

    #[test]
    fn unit_follows_fahrenheit_flag() {
        assert_eq!(TemperatureUnit::from_fahrenheit_flag(false), TemperatureUnit::Metric);
        assert_eq!(TemperatureUnit::from_fahrenheit_flag(true), TemperatureUnit::Imperial);
        assert_eq!(TemperatureUnit::Imperial.suffix(), "°F");
        assert_eq!(TemperatureUnit::Metric.to_string(), "metric");
    }

    #[test]
    fn result_serializes_camel_case_and_skips_missing_country() {
        let result = WeatherResult {
            city: "London".into(),
            country: None,
            temperature: "12°C".into(),
            description: "light rain".into(),
            humidity: "81%".into(),
            show_humidity: true,
            wind_speed: "15 km/h".into(),
            icon: "icon".into(),
            offline: true,
        };

        let json = serde_json::to_value(&result).expect("serializable");
        assert_eq!(json["showHumidity"], true);
        assert_eq!(json["windSpeed"], "15 km/h");
        assert!(json.get("country").is_none());
    }
}
