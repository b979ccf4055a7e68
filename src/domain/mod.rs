//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod planet;

pub use planet::{NewPlanet, Planet, PlanetCriteria, PlanetField, PlanetId};
