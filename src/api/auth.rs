use axum::http::{header::AUTHORIZATION, HeaderMap};
use log::warn;

use super::errors::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is missing or invalid.")]
    MissingBearer,
    #[error("Invalid API key.")]
    InvalidKey,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingBearer => ApiError::unauthorized(err.to_string()),
            AuthError::InvalidKey => ApiError::forbidden(err.to_string()),
        }
    }
}

/// Compare an `Authorization` header value against the shared secret
pub fn check_bearer(header: Option<&str>, api_key: &str) -> Result<(), AuthError> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthError::MissingBearer)?;

    if token == api_key {
        Ok(())
    } else {
        Err(AuthError::InvalidKey)
    }
}

/// Gate for write endpoints
pub fn authorize(headers: &HeaderMap, api_key: &str) -> Result<(), ApiError> {
    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    check_bearer(header, api_key).map_err(|err| {
        warn!("Rejected write request: {}", err);
        ApiError::from(err)
    })
}
