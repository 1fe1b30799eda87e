// crates/backend-lib/src/middleware/mod.rs

//! Request middleware.

pub mod owner;

pub use owner::{bearer_token, require_owner, AuthedUser};
