//! Planets API - Star Wars planet records over HTTP
//!
//! Stores planets (name, climate, terrain) and enriches each new record
//! with the number of films it appears in, as reported by SWAPI.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core planet entity and identifiers
//! - **services**: Planet use cases
//! - **infra**: Database, migrations, repositories and the SWAPI client
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start the server without SWAPI enrichment
//! cargo run -- serve --offline
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewPlanet, Planet, PlanetId};
pub use errors::{AppError, AppResult};
