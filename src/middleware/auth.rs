use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{validate_token, Claims};
use crate::config;
use crate::error::ApiError;

/// Authenticated principal extracted from a bearer token
#[derive(Clone, Debug)]
pub struct AuthPrincipal {
    pub email: String,
}

impl From<Claims> for AuthPrincipal {
    fn from(claims: Claims) -> Self {
        Self { email: claims.email }
    }
}

/// Bearer-token gate for the full movie listing. Only the configured admin
/// principal is allowed through; every failure mode (missing header, bad
/// token, wrong principal) is rejected with 403.
pub async fn admin_gate(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Extract bearer token from Authorization header
    let token = extract_bearer_from_headers(&headers).map_err(ApiError::forbidden)?;

    // Validate and decode the token
    let claims = validate_token(&token).map_err(|e| {
        tracing::debug!("token rejected: {}", e);
        ApiError::forbidden("Invalid or expired token")
    })?;

    // Authorize only the fixed admin principal
    if claims.email != config::config().security.admin_email {
        return Err(ApiError::forbidden("Insufficient privileges"));
    }

    // Inject the principal into the request for handlers
    let principal = AuthPrincipal::from(claims);
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Extract a bearer token from the Authorization header
fn extract_bearer_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert!(extract_bearer_from_headers(&headers).is_err());
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(extract_bearer_from_headers(&headers).is_err());
    }

    #[test]
    fn empty_token_is_rejected() {
        let headers = headers_with("Bearer ");
        assert!(extract_bearer_from_headers(&headers).is_err());
    }
}
