//! Planet service - Handles planet-related business logic.
//!
//! Creation runs enrichment, insert and reload in sequence; every other
//! use case is a single repository call whose errors pass through as-is.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewPlanet, Planet, PlanetCriteria, PlanetField, PlanetId};
use crate::errors::AppResult;
use crate::infra::{FilmsLookup, PlanetRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Planet service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlanetService: Send + Sync {
    /// Enrich, persist and reload a validated planet
    async fn create_planet(&self, planet: NewPlanet) -> AppResult<Planet>;

    /// Get planet by ID
    async fn get_planet(&self, id: PlanetId) -> AppResult<Planet>;

    /// Get planet by exact name
    async fn get_planet_by_name(&self, name: &str) -> AppResult<Planet>;

    /// Planets whose name contains `term`, ignoring case
    async fn search_planets(&self, term: &str) -> AppResult<Vec<Planet>>;

    /// List all planets
    async fn list_planets(&self) -> AppResult<Vec<Planet>>;

    /// Delete planet by ID
    async fn delete_planet(&self, id: PlanetId) -> AppResult<()>;
}

/// Concrete implementation of PlanetService using repository and SWAPI lookup.
pub struct PlanetManager {
    repo: Arc<dyn PlanetRepository>,
    films: Arc<dyn FilmsLookup>,
}

impl PlanetManager {
    /// Create new planet service instance
    pub fn new(repo: Arc<dyn PlanetRepository>, films: Arc<dyn FilmsLookup>) -> Self {
        Self { repo, films }
    }
}

#[async_trait]
impl PlanetService for PlanetManager {
    async fn create_planet(&self, planet: NewPlanet) -> AppResult<Planet> {
        let films_appeared_in = self.films.films_appeared_in(&planet.name).await?;

        let id = self
            .repo
            .create(planet.name, planet.climate, planet.terrain, films_appeared_in)
            .await?;
        tracing::info!(%id, films_appeared_in, "Planet created");

        self.repo.get_by_id(id).await
    }

    async fn get_planet(&self, id: PlanetId) -> AppResult<Planet> {
        self.repo.get_by_id(id).await
    }

    async fn get_planet_by_name(&self, name: &str) -> AppResult<Planet> {
        self.repo.get_by_name(name).await
    }

    async fn search_planets(&self, term: &str) -> AppResult<Vec<Planet>> {
        let criteria = PlanetCriteria::from([(PlanetField::Name, term.to_string())]);
        self.repo.get_matched(&criteria).await
    }

    async fn list_planets(&self) -> AppResult<Vec<Planet>> {
        self.repo.get_all().await
    }

    async fn delete_planet(&self, id: PlanetId) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(%id, "Planet deleted");
        Ok(())
    }
}
