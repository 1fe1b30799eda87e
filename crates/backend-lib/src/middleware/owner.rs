// ============================
// crates/backend-lib/src/middleware/owner.rs
// ============================
//! Ownership gate for the `/data/{owner}` routes.
use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::error::AppError;
use crate::AppState;

/// Identity resolved by the gate, exposed to downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthedUser(pub String);

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The token is the segment after the scheme, never a slice of the raw
/// header value.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

/// Admit a request iff its bearer token resolves to the target owner.
///
/// Missing, malformed, unknown, and expired tokens are rejected before the
/// owner comparison; a valid token for a different owner is rejected after
/// it. Runs once per request, never retried.
pub async fn require_owner<S>(
    State(state): State<Arc<AppState<S>>>,
    Path(owner): Path<String>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError>
where
    S: Clone + Send + Sync + 'static,
{
    let token = bearer_token(req.headers())
        .ok_or_else(|| AppError::Unauthenticated("missing bearer token".to_string()))?;

    let username = state
        .auth
        .resolve(token)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("invalid or expired token".to_string()))?;

    if username != owner {
        debug!(%username, %owner, "owner mismatch");
        return Err(AppError::Forbidden);
    }

    req.extensions_mut().insert(AuthedUser(username));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(
            bearer_token(&headers_with("Bearer abc123")),
            Some("abc123")
        );
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
    }

    #[test]
    fn test_bearer_token_missing_segment() {
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }
}
