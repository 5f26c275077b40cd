pub mod movie_service;

pub use movie_service::MovieService;

use crate::database::manager::DatabaseError;
use crate::database::store::PgMovieStore;

/// Build a movie service backed by the shared connection pool
pub async fn movie_service() -> Result<MovieService<PgMovieStore>, DatabaseError> {
    Ok(MovieService::new(PgMovieStore::from_manager().await?))
}
