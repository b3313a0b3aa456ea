//! Request handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use weather_core::{QueryError, WeatherQuery, WeatherResult};

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

/// GET /api/weather?city=London
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    params: Result<Query<WeatherParams>, QueryRejection>,
) -> Result<Json<WeatherResult>, ApiError> {
    // Malformed query strings (e.g. a repeated `city`) get the same JSON 400.
    let Query(params) = params.map_err(|rejection| {
        debug!(error = %rejection, "Rejected weather query string");
        QueryError::MissingCity
    })?;
    let query = WeatherQuery::new(params.city.as_deref().unwrap_or_default())?;
    let result = state.relay.fetch(&query).await?;
    Ok(Json(result))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
