//! HTTP request handlers.

pub mod planet_handler;

pub use planet_handler::planet_routes;
