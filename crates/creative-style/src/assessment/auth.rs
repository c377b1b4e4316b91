use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::config::AdminConfig;

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token handed back by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminToken {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("admin login is disabled")]
    LoginDisabled,
    #[error("authorization header is required")]
    MissingToken,
    #[error("invalid authorization format")]
    MalformedHeader,
    #[error("token has expired")]
    TokenExpired,
    #[error("invalid token")]
    InvalidToken,
    #[error("unable to issue token: {0}")]
    Issue(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::LoginDisabled => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Issue(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::TokenExpired
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Issues and verifies HS256 admin tokens against the configured credentials.
pub struct AdminAuthenticator {
    username: String,
    password: Option<String>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Option<Duration>,
}

impl AdminAuthenticator {
    pub fn new(config: &AdminConfig) -> Self {
        let secret = config.token_secret.as_bytes();
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::try_hours(config.token_ttl_hours),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<AdminToken, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let expected = self.password.as_deref().ok_or(AuthError::LoginDisabled)?;

        let username_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(expected.as_bytes());
        if !bool::from(username_ok & password_ok) {
            warn!("rejected admin login");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue(username, Utc::now())?;
        Ok(AdminToken {
            token,
            username: username.to_string(),
        })
    }

    pub fn issue(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let expires_at = self
            .ttl
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| AuthError::Issue("token lifetime is out of range".to_string()))?;
        let claims = AdminClaims {
            sub: username.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| AuthError::Issue(err.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<AdminClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => {
                    debug!("admin token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    warn!("admin token validation failed: {}", err);
                    AuthError::InvalidToken
                }
            })
    }

    /// Verify an `Authorization: Bearer <token>` header value.
    pub fn verify_header(&self, value: Option<&str>) -> Result<AdminClaims, AuthError> {
        let value = value.ok_or(AuthError::MissingToken)?;
        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                self.verify(token)
            }
            _ => Err(AuthError::MalformedHeader),
        }
    }
}

/// Middleware guarding admin routes; verified claims are placed in request extensions.
pub async fn require_admin(
    State(auth): State<Arc<AdminAuthenticator>>,
    mut request: Request,
    next: Next,
) -> Response {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match auth.verify_header(header_value) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}
