//! HTTP surface of the weather relay.
//!
//! Exposes `GET /api/weather?city=` on top of [`weather_core::WeatherRelay`].

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
