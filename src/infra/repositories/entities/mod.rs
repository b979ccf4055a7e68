//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod planet;

pub use planet::{ActiveModel as PlanetActiveModel, Entity as PlanetEntity, Model as PlanetModel};
