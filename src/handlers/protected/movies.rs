use axum::{extract::Extension, response::IntoResponse, Json};

use crate::error::ApiError;
use crate::middleware::AuthPrincipal;
use crate::services;

/// GET /movies - full catalog listing. Reached only through the admin gate,
/// which injects the authenticated principal.
pub async fn list(Extension(principal): Extension<AuthPrincipal>) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!(email = %principal.email, "listing movies");

    let service = services::movie_service().await?;
    let movies = service.get_movies().await?;

    Ok(Json(movies))
}
