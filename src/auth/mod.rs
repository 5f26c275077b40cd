use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

pub mod credentials;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum TokenError {
    TokenGeneration(String),
    InvalidToken,
    InvalidSecret,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::TokenGeneration(msg) => write!(f, "Token generation error: {}", msg),
            TokenError::InvalidToken => write!(f, "Invalid token"),
            TokenError::InvalidSecret => write!(f, "Invalid token secret"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Sign claims into a bearer token using the process-wide secret.
pub fn create_token(claims: &Claims) -> Result<String, TokenError> {
    encode_with_secret(claims, &config::config().security.jwt_secret)
}

/// Validate a bearer token and recover its claims. Malformed, tampered and
/// expired tokens are rejected uniformly as `InvalidToken`.
pub fn validate_token(token: &str) -> Result<Claims, TokenError> {
    decode_with_secret(token, &config::config().security.jwt_secret)
}

pub fn encode_with_secret(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| TokenError::TokenGeneration(e.to_string()))
}

pub fn decode_with_secret(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| TokenError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn claims_valid_for(email: &str, hours: i64) -> Claims {
        let now = Utc::now();
        Claims {
            email: email.to_string(),
            exp: (now + Duration::hours(hours)).timestamp(),
            iat: now.timestamp(),
        }
    }

    #[test]
    fn round_trip_preserves_email_claim() {
        let claims = claims_valid_for("admin@gmail.com", 1);
        let token = encode_with_secret(&claims, SECRET).unwrap();
        let decoded = decode_with_secret(&token, SECRET).unwrap();
        assert_eq!(decoded.email, "admin@gmail.com");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = claims_valid_for("admin@gmail.com", 1);
        let token = encode_with_secret(&claims, SECRET).unwrap();
        assert!(matches!(
            decode_with_secret(&token, "some-other-secret"),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let claims = claims_valid_for("admin@gmail.com", 1);
        let token = encode_with_secret(&claims, SECRET).unwrap();

        // Flip a character in the payload segment
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(matches!(
            decode_with_secret(&tampered, SECRET),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = claims_valid_for("admin@gmail.com", -2);
        let token = encode_with_secret(&claims, SECRET).unwrap();
        assert!(matches!(
            decode_with_secret(&token, SECRET),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            decode_with_secret("not-a-token", SECRET),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let claims = claims_valid_for("admin@gmail.com", 1);
        assert!(matches!(
            encode_with_secret(&claims, ""),
            Err(TokenError::InvalidSecret)
        ));
    }
}
