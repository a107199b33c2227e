use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AppError;

/// Credentials from an `Authorization: Basic ...` header.
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn parse(header: &str) -> Option<Self> {
        let encoded = header.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// The username is ignored; only the password is checked, byte for byte.
pub fn verify_admin(headers: &HeaderMap, admin_password: &str) -> Result<(), AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidPassword)?;

    let credentials = BasicCredentials::parse(header).ok_or(AppError::InvalidPassword)?;

    if credentials.password.as_bytes() != admin_password.as_bytes() {
        return Err(AppError::InvalidPassword);
    }

    Ok(())
}
