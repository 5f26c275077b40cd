use axum::{response::IntoResponse, Json};
use serde::Deserialize;

use crate::auth::credentials::{ConfigCredentialVerifier, CredentialVerifier};
use crate::auth::{create_token, Claims};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - exchange the admin credentials for a bearer token.
/// The response body is the token itself as a JSON string.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<impl IntoResponse, ApiError> {
    let verifier = ConfigCredentialVerifier::from_config();

    let principal = verifier
        .verify(&payload.email, &payload.password)
        .ok_or_else(|| {
            tracing::debug!(email = %payload.email, "login rejected");
            ApiError::unauthorized("Invalid email or password")
        })?;

    let claims = Claims::new(principal.email);
    let token = create_token(&claims).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    Ok(Json(token))
}
