//! Application state - Dependency injection container.
//!
//! Built once at startup and shared by every request handler.

use std::sync::Arc;

use crate::infra::{Database, FilmsLookup};
use crate::services::{PlanetService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Planet service
    pub planet_service: Arc<dyn PlanetService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database and the film lookup
    /// chosen at startup.
    pub fn from_database(database: Arc<Database>, films: Arc<dyn FilmsLookup>) -> Self {
        let container = Services::from_connection(database.get_connection(), films);

        Self {
            planet_service: container.planets(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(planet_service: Arc<dyn PlanetService>, database: Arc<Database>) -> Self {
        Self {
            planet_service,
            database,
        }
    }
}
