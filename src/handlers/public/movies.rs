use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Datelike;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use crate::database::record::MovieDraft;
use crate::error::ApiError;
use crate::services;

const MOVIE_NOT_FOUND: &str = "Movie not found";

/// Path ids are constrained to this range, matching the declared parameter
/// bounds of the API contract
const ID_MIN: i32 = 1;
const ID_MAX: i32 = 2000;

const CATEGORY_QUERY_MIN: usize = 5;
const CATEGORY_QUERY_MAX: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

/// GET /movies/:id - show a single movie
pub async fn show(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    check_id_range(id)?;

    let service = services::movie_service().await?;
    let movie = service
        .get_movie(id)
        .await?
        .ok_or_else(|| ApiError::not_found(MOVIE_NOT_FOUND))?;

    Ok(Json(movie))
}

/// GET /movies/?category= - list movies in a category (exact match).
/// An empty match set is reported as 404, mirroring the by-id miss.
pub async fn by_category(Query(query): Query<CategoryQuery>) -> Result<impl IntoResponse, ApiError> {
    let len = query.category.chars().count();
    if len < CATEGORY_QUERY_MIN || len > CATEGORY_QUERY_MAX {
        return Err(ApiError::unprocessable_entity(
            "Invalid query parameter",
            HashMap::from([(
                "category".to_string(),
                format!(
                    "length must be between {} and {}",
                    CATEGORY_QUERY_MIN, CATEGORY_QUERY_MAX
                ),
            )]),
        ));
    }

    let service = services::movie_service().await?;
    let movies = service.get_movies_by_category(&query.category).await?;

    if movies.is_empty() {
        return Err(ApiError::not_found(MOVIE_NOT_FOUND));
    }

    Ok(Json(movies))
}

/// POST /movies - validate and persist a new movie; the store assigns the id
pub async fn create(Json(draft): Json<MovieDraft>) -> Result<impl IntoResponse, ApiError> {
    draft.validate(current_year())?;

    let service = services::movie_service().await?;
    let movie = service.create_movie(&draft).await?;
    tracing::info!(id = movie.id, "movie registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Se registro la pelicula" })),
    ))
}

/// PUT /movies/:id - overwrite all fields of an existing movie
pub async fn update(
    Path(id): Path<i32>,
    Json(draft): Json<MovieDraft>,
) -> Result<impl IntoResponse, ApiError> {
    draft.validate(current_year())?;

    let service = services::movie_service().await?;
    if !service.update_movie(id, &draft).await? {
        return Err(ApiError::not_found(MOVIE_NOT_FOUND));
    }

    Ok(Json(json!({ "message": "The movie data has been modified" })))
}

/// DELETE /movies/:id - remove a movie
pub async fn remove(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    check_id_range(id)?;

    let service = services::movie_service().await?;
    if !service.delete_movie(id).await? {
        return Err(ApiError::not_found(MOVIE_NOT_FOUND));
    }

    Ok(Json(json!({ "message": "The movie has been removed" })))
}

fn check_id_range(id: i32) -> Result<(), ApiError> {
    if (ID_MIN..=ID_MAX).contains(&id) {
        Ok(())
    } else {
        Err(ApiError::unprocessable_entity(
            "Invalid path parameter",
            HashMap::from([(
                "id".to_string(),
                format!("must be between {} and {}", ID_MIN, ID_MAX),
            )]),
        ))
    }
}

/// Year ceiling for validation, taken from the clock at request time
fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_range_boundaries() {
        assert!(check_id_range(1).is_ok());
        assert!(check_id_range(2000).is_ok());
        assert!(check_id_range(0).is_err());
        assert!(check_id_range(2001).is_err());
        assert!(check_id_range(-5).is_err());
    }
}
