//! Service Container - Centralized service access.
//!
//! Wires repositories and external clients into the services the HTTP
//! layer depends on. Everything is shared through `Arc` and safe for
//! concurrent use by in-flight requests.

use std::sync::Arc;

use super::{PlanetManager, PlanetService};
use crate::infra::{FilmsLookup, PlanetStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get planet service
    fn planets(&self) -> Arc<dyn PlanetService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    planet_service: Arc<dyn PlanetService>,
}

impl Services {
    /// Create service container from database connection and film lookup
    pub fn from_connection(db: sea_orm::DatabaseConnection, films: Arc<dyn FilmsLookup>) -> Self {
        let planet_repo = Arc::new(PlanetStore::new(db));
        let planet_service = Arc::new(PlanetManager::new(planet_repo, films));

        Self { planet_service }
    }
}

impl ServiceContainer for Services {
    fn planets(&self) -> Arc<dyn PlanetService> {
        self.planet_service.clone()
    }
}
