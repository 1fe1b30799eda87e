// ============================
// crates/backend-lib/src/handlers/auth.rs
// ============================
//! Registration and login handlers.
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use stash_common::{ApiMessage, LoginRequest, LoginResponse, RegisterRequest};
use tracing::info;

use crate::error::AppError;
use crate::AppState;

/// `POST /register`
pub async fn register<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiMessage>), AppError>
where
    S: Clone + Send + Sync + 'static,
{
    state.auth.register(&body.username, &body.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiMessage {
            message: "User registered successfully.".to_string(),
        }),
    ))
}

/// `POST /login`
pub async fn login<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError>
where
    S: Clone + Send + Sync + 'static,
{
    let token = state.auth.login(&body.username, &body.password).await?;
    info!(username = %body.username, "login succeeded");

    Ok(Json(LoginResponse { token }))
}
