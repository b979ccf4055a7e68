//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::planet_handler;
use crate::domain::Planet;
use crate::types::{MessageResponse, PlanetListResponse, PlanetResponse, PlanetSearchResponse};

/// OpenAPI documentation for the Planets API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Planets API",
        version = "0.1.0",
        description = "Star Wars planet records enriched with SWAPI film counts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        planet_handler::create_planet,
        planet_handler::get_planet,
        planet_handler::list_planets,
        planet_handler::delete_planet,
    ),
    components(
        schemas(
            Planet,
            planet_handler::CreatePlanetRequest,
            PlanetResponse,
            PlanetListResponse,
            PlanetSearchResponse,
            MessageResponse,
        )
    ),
    tags(
        (name = "Planets", description = "Planet records")
    )
)]
pub struct ApiDoc;
