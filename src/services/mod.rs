//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod container;
mod planet_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use planet_service::{PlanetManager, PlanetService};

#[cfg(any(test, feature = "test-utils"))]
pub use planet_service::MockPlanetService;
