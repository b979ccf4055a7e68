//! Shared helpers for integration tests.
//!
//! Every test gets its own in-memory SQLite database with all migrations
//! applied, so nothing here needs a running Postgres.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use planets_api::api::{create_router, AppState};
use planets_api::errors::{AppError, AppResult};
use planets_api::infra::{Database, FilmsLookup, Migrator};

/// Fresh in-memory database, migrated.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn test_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection = SeaDatabase::connect(options)
        .await
        .expect("in-memory sqlite should open");
    Migrator::up(&connection, None)
        .await
        .expect("migrations should apply");
    connection
}

/// Film lookup returning a fixed count, or failing, and counting calls.
#[derive(Default)]
pub struct StaticFilmsLookup {
    films: u32,
    fail: bool,
    calls: AtomicUsize,
}

impl StaticFilmsLookup {
    pub fn returning(films: u32) -> Self {
        Self {
            films,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FilmsLookup for StaticFilmsLookup {
    async fn films_appeared_in(&self, _planet_name: &str) -> AppResult<u32> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::internal("SWAPI unreachable"));
        }
        Ok(self.films)
    }
}

/// Full application router over a fresh database.
pub async fn test_app(films: Arc<StaticFilmsLookup>) -> Router {
    let database = Arc::new(Database::from_connection(test_connection().await));
    create_router(AppState::from_database(database, films))
}

/// Send a request through the router and decode the JSON body.
///
/// Non-JSON bodies decode to `Value::Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default().to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Create a planet and return its id, asserting success.
pub async fn create_planet(app: &Router, name: &str, climate: &str, terrain: &str) -> String {
    let body = serde_json::json!({ "name": name, "climate": climate, "terrain": terrain });
    let (status, body) = send(app, "POST", "/planet/", Some(&body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body["planet"]["id"].as_str().unwrap().to_string()
}
