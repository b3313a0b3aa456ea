//! Integration tests for the HTTP API

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use weather_core::{
    DummyRecord, Observation, ProviderError, ProviderReply, RuntimeConfig, TemperatureUnit,
    WeatherProvider, WeatherRelay,
};
use weather_relay::{AppState, create_router, handlers::HealthResponse};

/// Provider double returning a canned reply.
#[derive(Debug)]
enum MockProvider {
    Live,
    Rejected(u16),
    Unreachable,
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn current(
        &self,
        city: &str,
        _unit: TemperatureUnit,
    ) -> Result<ProviderReply, ProviderError> {
        match self {
            MockProvider::Live => Ok(ProviderReply::Observed(Observation {
                city: city.to_string(),
                country: Some("GB".into()),
                temperature: 15.4,
                humidity: 72,
                description: "broken clouds".into(),
                icon: "04d".into(),
                wind_speed_mps: 2.78,
            })),
            MockProvider::Rejected(status) => Ok(ProviderReply::Rejected {
                status: *status,
                body: r#"{"cod":"404","message":"city not found"}"#.into(),
            }),
            MockProvider::Unreachable => Err(ProviderError::MissingConditions),
        }
    }
}

fn config(default_location: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_key: "KEY".into(),
        show_humidity: false,
        default_location: default_location.into(),
        dummy_data: vec![DummyRecord {
            city: "London".into(),
            country: None,
            temperature: "12°C".into(),
            description: "light rain".into(),
            humidity: "81%".into(),
            wind_speed: "15 km/h".into(),
            icon: "http://openweathermap.org/img/wn/10d@2x.png".into(),
        }],
        ..RuntimeConfig::default()
    }
}

fn create_test_server(config: RuntimeConfig, provider: MockProvider) -> TestServer {
    let relay = WeatherRelay::new(Arc::new(config), Arc::new(provider));
    TestServer::new(create_router(AppState::new(relay))).expect("Failed to create test server")
}

#[tokio::test]
async fn missing_city_is_bad_request() {
    let server = create_test_server(config("London"), MockProvider::Live);

    let response = server.get("/api/weather").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "City parameter is required." }));
}

#[tokio::test]
async fn blank_city_is_bad_request() {
    let server = create_test_server(config("London"), MockProvider::Live);

    let response = server.get("/api/weather").add_query_param("city", "   ").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "City parameter is required.");
}

#[tokio::test]
async fn malformed_query_is_json_bad_request() {
    let server = create_test_server(config("London"), MockProvider::Live);

    let response = server.get("/api/weather?city=a&city=b").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "message": "City parameter is required." }));
}

#[tokio::test]
async fn live_weather_is_normalized() {
    let server = create_test_server(config("London"), MockProvider::Live);

    let response = server.get("/api/weather").add_query_param("city", "London").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "city": "London",
            "country": "GB",
            "temperature": "15°C",
            "description": "broken clouds",
            "humidity": "72%",
            "showHumidity": false,
            "windSpeed": "10 km/h",
            "icon": "http://openweathermap.org/img/wn/04d@2x.png",
            "offline": false
        })
    );
}

#[tokio::test]
async fn provider_rejection_serves_dummy_record() {
    let server = create_test_server(config("London"), MockProvider::Rejected(404));

    let response = server.get("/api/weather").add_query_param("city", "Atlantis").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "city": "London",
            "temperature": "12°C",
            "description": "light rain",
            "humidity": "81%",
            "showHumidity": false,
            "windSpeed": "15 km/h",
            "icon": "http://openweathermap.org/img/wn/10d@2x.png",
            "offline": true
        })
    );
}

#[tokio::test]
async fn provider_failure_is_internal_error() {
    let server = create_test_server(config("London"), MockProvider::Unreachable);

    let response = server.get("/api/weather").add_query_param("city", "London").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "message": "Internal server error." }));
}

#[tokio::test]
async fn missing_dummy_record_is_internal_error() {
    let server = create_test_server(config("Oslo"), MockProvider::Rejected(503));

    let response = server.get("/api/weather").add_query_param("city", "Oslo").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["message"], "Internal server error.");
}

#[tokio::test]
async fn health_reports_version() {
    let server = create_test_server(config("London"), MockProvider::Live);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}
