//! Planet handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    MSG_PLANETS_RETRIEVED, MSG_PLANET_CREATED, MSG_PLANET_DELETED, MSG_PLANET_RETRIEVED,
};
use crate::domain::{NewPlanet, PlanetId};
use crate::errors::{AppError, AppResult};
use crate::types::{
    Created, MessageResponse, PlanetListResponse, PlanetResponse, PlanetSearchResponse,
};

/// Planet creation request.
///
/// Fields are optional on the wire so that missing and empty values are
/// both reported, all at once.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreatePlanetRequest {
    #[validate(
        required(message = "Name field is empty or missing."),
        length(min = 1, message = "Name field is empty or missing.")
    )]
    #[schema(example = "Tatooine")]
    pub name: Option<String>,
    #[validate(
        required(message = "Climate field is empty or missing."),
        length(min = 1, message = "Climate field is empty or missing.")
    )]
    #[schema(example = "arid")]
    pub climate: Option<String>,
    #[validate(
        required(message = "Terrain field is empty or missing."),
        length(min = 1, message = "Terrain field is empty or missing.")
    )]
    #[schema(example = "desert")]
    pub terrain: Option<String>,
}

impl CreatePlanetRequest {
    /// Only meaningful after validation succeeded.
    fn into_new_planet(self) -> NewPlanet {
        NewPlanet {
            name: self.name.unwrap_or_default(),
            climate: self.climate.unwrap_or_default(),
            terrain: self.terrain.unwrap_or_default(),
        }
    }
}

/// Collection query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlanetQuery {
    /// Case-insensitive substring of the planet name
    pub search: Option<String>,
}

/// Create planet routes
pub fn planet_routes() -> Router<AppState> {
    Router::new()
        .route("/planet", get(list_planets).post(create_planet))
        .route("/planet/", get(list_planets).post(create_planet))
        .route("/planet/:id", get(get_planet).delete(delete_planet))
}

/// Create a planet, enriched with its SWAPI film count
#[utoipa::path(
    post,
    path = "/planet/",
    tag = "Planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created", body = PlanetResponse),
        (status = 400, description = "Malformed body or missing fields"),
        (status = 500, description = "Database or SWAPI failure")
    )
)]
pub async fn create_planet(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePlanetRequest>,
) -> AppResult<Created<PlanetResponse>> {
    let planet = state
        .planet_service
        .create_planet(payload.into_new_planet())
        .await?;

    Ok(Created(PlanetResponse::new(MSG_PLANET_CREATED, planet)))
}

/// Get planet by ID
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = "Planets",
    params(
        ("id" = String, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet found", body = PlanetResponse),
        (status = 400, description = "Malformed planet ID"),
        (status = 404, description = "Planet not found")
    )
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<PlanetResponse>> {
    let id = parse_id(&id)?;
    let planet = state.planet_service.get_planet(id).await?;

    Ok(Json(PlanetResponse::new(MSG_PLANET_RETRIEVED, planet)))
}

/// List all planets, or search them by name
#[utoipa::path(
    get,
    path = "/planet/",
    tag = "Planets",
    params(PlanetQuery),
    responses(
        (status = 200, description = "All planets, or `results` instead of `planets` when `search` is given", body = PlanetListResponse),
        (status = 400, description = "Malformed query string"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_planets(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PlanetQuery>,
) -> AppResult<Response> {
    match query.search {
        Some(term) => {
            let results = state.planet_service.search_planets(&term).await?;
            Ok(Json(PlanetSearchResponse::new(MSG_PLANETS_RETRIEVED, results)).into_response())
        }
        None => {
            let planets = state.planet_service.list_planets().await?;
            Ok(Json(PlanetListResponse::new(MSG_PLANETS_RETRIEVED, planets)).into_response())
        }
    }
}

/// Delete planet by ID
#[utoipa::path(
    delete,
    path = "/planet/{id}",
    tag = "Planets",
    params(
        ("id" = String, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet deleted", body = MessageResponse),
        (status = 400, description = "Malformed planet ID"),
        (status = 404, description = "Planet not found")
    )
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.planet_service.delete_planet(id).await?;

    Ok(Json(MessageResponse::new(MSG_PLANET_DELETED)))
}

fn parse_id(raw: &str) -> AppResult<PlanetId> {
    raw.parse().map_err(AppError::generic_bad_request)
}
