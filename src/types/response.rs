//! Success envelopes: always `{"message", ...payload}`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Planet;

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Single planet response
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetResponse {
    pub message: String,
    pub planet: Planet,
}

impl PlanetResponse {
    pub fn new(message: impl Into<String>, planet: Planet) -> Self {
        Self {
            message: message.into(),
            planet,
        }
    }
}

/// Full listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetListResponse {
    pub message: String,
    pub planets: Vec<Planet>,
}

impl PlanetListResponse {
    pub fn new(message: impl Into<String>, planets: Vec<Planet>) -> Self {
        Self {
            message: message.into(),
            planets,
        }
    }
}

/// Search response
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetSearchResponse {
    pub message: String,
    pub results: Vec<Planet>,
}

impl PlanetSearchResponse {
    pub fn new(message: impl Into<String>, results: Vec<Planet>) -> Self {
        Self {
            message: message.into(),
            results,
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
