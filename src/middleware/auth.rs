use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
};
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::startup::AppState;

/// Shared-secret bearer auth for the protected endpoints.
///
/// OPTIONS requests pass straight through so CORS pre-flight never needs a
/// credential. Everything else must carry `Authorization: Bearer <token>`
/// matching the configured secret, or the operation is never executed.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token_matches(token, state.config.auth.token.expose_secret()))
        .unwrap_or(false);

    if !authorized {
        tracing::warn!(
            path = %req.uri().path(),
            "Rejected request with missing or invalid bearer token"
        );
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}

/// Constant-time token comparison. Length is checked first; the token length
/// is not secret.
fn token_matches(candidate: &str, expected: &str) -> bool {
    let candidate = candidate.as_bytes();
    let expected = expected.as_bytes();

    if candidate.len() != expected.len() {
        return false;
    }

    candidate.ct_eq(expected).into()
}
