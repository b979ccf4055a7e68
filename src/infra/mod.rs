//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - External API clients (SWAPI enrichment)

pub mod db;
pub mod repositories;
pub mod swapi;

pub use db::{Database, Migrator};
pub use repositories::{PlanetRepository, PlanetStore};
pub use swapi::{DisabledFilmsLookup, FilmsLookup, SwapiClient};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockPlanetRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use swapi::MockFilmsLookup;
