// ============================
// crates/backend-lib/src/handlers/data.rs
// ============================
//! Per-owner blob handlers. Requests only reach these after the owner gate
//! has admitted them.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;
use stash_common::{ApiMessage, OwnerData};
use tracing::debug;

use crate::error::AppError;
use crate::middleware::AuthedUser;
use crate::storage::DataStore;
use crate::AppState;

/// `GET /data/{owner}`
pub async fn read<S>(
    State(state): State<Arc<AppState<S>>>,
    Path(owner): Path<String>,
    Extension(user): Extension<AuthedUser>,
) -> Result<Json<OwnerData>, AppError>
where
    S: DataStore + Clone + Send + Sync + 'static,
{
    debug!(user = %user.0, "reading blob");

    let data = state
        .storage
        .read(&owner)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no data stored for '{owner}'")))?;

    Ok(Json(OwnerData { name: owner, data }))
}

/// `POST /data/{owner}`
pub async fn write<S>(
    State(state): State<Arc<AppState<S>>>,
    Path(owner): Path<String>,
    Extension(user): Extension<AuthedUser>,
    Json(body): Json<Value>,
) -> Result<Json<ApiMessage>, AppError>
where
    S: DataStore + Clone + Send + Sync + 'static,
{
    debug!(user = %user.0, "writing blob");
    state.storage.write(&owner, &body).await?;

    Ok(Json(ApiMessage {
        message: "Data written successfully.".to_string(),
    }))
}

/// `DELETE /data/{owner}`
pub async fn remove<S>(
    State(state): State<Arc<AppState<S>>>,
    Path(owner): Path<String>,
    Extension(user): Extension<AuthedUser>,
) -> Result<Json<ApiMessage>, AppError>
where
    S: DataStore + Clone + Send + Sync + 'static,
{
    debug!(user = %user.0, "deleting blob");
    state.storage.delete(&owner).await?;

    Ok(Json(ApiMessage {
        message: "Data deleted successfully".to_string(),
    }))
}
