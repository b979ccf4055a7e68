//! Planet repository implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend,
    DbErr, EntityTrait, QueryFilter, Set,
};

use super::entities::planet::Column;
use super::entities::{PlanetActiveModel, PlanetEntity};
use crate::config::DB_OPERATION_TIMEOUT_SECONDS;
use crate::domain::{Planet, PlanetCriteria, PlanetField, PlanetId};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Planet repository trait for dependency injection.
///
/// Every operation is a single database round trip bounded by
/// [`DB_OPERATION_TIMEOUT_SECONDS`]; an expired call is an internal error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Insert a new planet and return its generated identifier
    async fn create(
        &self,
        name: String,
        climate: String,
        terrain: String,
        films_appeared_in: u32,
    ) -> AppResult<PlanetId>;

    /// Find planet by ID, not-found if absent
    async fn get_by_id(&self, id: PlanetId) -> AppResult<Planet>;

    /// Find planet by exact name, not-found if absent
    async fn get_by_name(&self, name: &str) -> AppResult<Planet>;

    /// Case-insensitive substring match on every non-empty criterion
    async fn get_matched(&self, criteria: &PlanetCriteria) -> AppResult<Vec<Planet>>;

    /// List every planet
    async fn get_all(&self) -> AppResult<Vec<Planet>>;

    /// Delete planet by ID, not-found if nothing was removed
    async fn delete(&self, id: PlanetId) -> AppResult<()>;
}

/// Concrete implementation of PlanetRepository
pub struct PlanetStore {
    db: DatabaseConnection,
}

impl PlanetStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanetRepository for PlanetStore {
    async fn create(
        &self,
        name: String,
        climate: String,
        terrain: String,
        films_appeared_in: u32,
    ) -> AppResult<PlanetId> {
        let id = PlanetId::generate();
        let active_model = PlanetActiveModel {
            id: Set(id.as_uuid()),
            name: Set(name),
            climate: Set(climate),
            terrain: Set(terrain),
            films_appeared_in: Set(i32::try_from(films_appeared_in).unwrap_or(i32::MAX)),
        };

        bounded(active_model.insert(&self.db)).await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: PlanetId) -> AppResult<Planet> {
        bounded(PlanetEntity::find_by_id(id.as_uuid()).one(&self.db))
            .await?
            .map(Planet::from)
            .ok_or_else(|| not_found_by_id(id))
    }

    async fn get_by_name(&self, name: &str) -> AppResult<Planet> {
        bounded(
            PlanetEntity::find()
                .filter(Column::Name.eq(name))
                .one(&self.db),
        )
        .await?
        .map(Planet::from)
        .ok_or_else(|| {
            AppError::not_found(format!("Planet not found under given name ({}).", name))
        })
    }

    async fn get_matched(&self, criteria: &PlanetCriteria) -> AppResult<Vec<Planet>> {
        // SQLite's LOWER() and LIKE only fold ASCII, so outside Postgres the
        // match runs on the domain side with the same Unicode lowercasing.
        if self.db.get_database_backend() != DbBackend::Postgres {
            let models = bounded(PlanetEntity::find().all(&self.db)).await?;
            return Ok(models
                .into_iter()
                .map(Planet::from)
                .filter(|planet| planet.matches(criteria))
                .collect());
        }

        let condition = criteria
            .iter()
            .filter(|(_, term)| !term.is_empty())
            .fold(Condition::all(), |condition, (field, term)| {
                condition.add(
                    Expr::col(column(*field))
                        .ilike(LikeExpr::new(contains_pattern(term)).escape(LIKE_ESCAPE)),
                )
            });

        let models = bounded(PlanetEntity::find().filter(condition).all(&self.db)).await?;

        Ok(models.into_iter().map(Planet::from).collect())
    }

    async fn get_all(&self) -> AppResult<Vec<Planet>> {
        self.get_matched(&PlanetCriteria::new()).await
    }

    async fn delete(&self, id: PlanetId) -> AppResult<()> {
        let result = bounded(PlanetEntity::delete_by_id(id.as_uuid()).exec(&self.db)).await?;

        if result.rows_affected == 0 {
            return Err(not_found_by_id(id));
        }

        Ok(())
    }
}

/// Run a database future under the per-operation timeout.
async fn bounded<T, F>(operation: F) -> AppResult<T>
where
    F: Future<Output = Result<T, DbErr>>,
{
    let result = tokio::time::timeout(Duration::from_secs(DB_OPERATION_TIMEOUT_SECONDS), operation)
        .await?;
    result.map_err(AppError::from)
}

fn not_found_by_id(id: PlanetId) -> AppError {
    AppError::not_found(format!("Planet not found under given id ({}).", id))
}

fn column(field: PlanetField) -> Column {
    match field {
        PlanetField::Name => Column::Name,
        PlanetField::Climate => Column::Climate,
        PlanetField::Terrain => Column::Terrain,
    }
}

/// Escape character for LIKE patterns.
const LIKE_ESCAPE: char = '!';

/// `%term%` with LIKE wildcards taken literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps() {
        assert_eq!(contains_pattern("TaToo"), "%TaToo%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50!%!_off%");
        assert_eq!(contains_pattern("wow!"), "%wow!!%");
        assert_eq!(contains_pattern("a\\b"), "%a\\b%");
    }
}
