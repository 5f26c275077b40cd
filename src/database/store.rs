use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::movie::Movie;
use crate::database::record::MovieDraft;

/// Persistence contract for the movies table. Each mutating operation is a
/// single statement and commits immediately.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Movie>, DatabaseError>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Movie>, DatabaseError>;
    /// Persists a validated draft; the table assigns the id
    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, DatabaseError>;
    /// Overwrites all fields of an existing row; false when the id is absent
    async fn update(&self, id: i32, draft: &MovieDraft) -> Result<bool, DatabaseError>;
    /// Removes a row; false when the id is absent
    async fn delete(&self, id: i32) -> Result<bool, DatabaseError>;
}

/// Postgres-backed movie store
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store on the shared process-wide pool
    pub async fn from_manager() -> Result<Self, DatabaseError> {
        Ok(Self::new(DatabaseManager::pool().await?))
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, DatabaseError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, overview, year, rating, category
             FROM movies
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Movie>, DatabaseError> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, overview, year, rating, category
             FROM movies
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Movie>, DatabaseError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, overview, year, rating, category
             FROM movies
             WHERE category = $1
             ORDER BY id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<Movie, DatabaseError> {
        let movie = sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, overview, year, rating, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, overview, year, rating, category",
        )
        .bind(&draft.title)
        .bind(&draft.overview)
        .bind(draft.year)
        .bind(draft.rating)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn update(&self, id: i32, draft: &MovieDraft) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "UPDATE movies
             SET title = $1, overview = $2, year = $3, rating = $4, category = $5
             WHERE id = $6",
        )
        .bind(&draft.title)
        .bind(&draft.overview)
        .bind(draft.year)
        .bind(draft.rating)
        .bind(&draft.category)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
