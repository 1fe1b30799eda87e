// ================
// crates/common/src/lib.rs
// ================
//! Shared wire types
//! used for communication between the stash server and its clients.
//! These are the JSON payloads of the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /register`
/// # Fields
/// * `username` - Name the account (and its stored blob) will be scoped to
/// * `password` - Plaintext password, hashed before storage
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /login`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login reply carrying the bearer token for subsequent
/// `/data/{owner}` calls
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
}

/// A stored blob together with the owner it is scoped to
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OwnerData {
    pub name: String,
    pub data: Value,
}

/// Generic human-readable acknowledgement
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiMessage {
    pub message: String,
}
