//! Read-only client for the remote posts/users API
//!
//! The remote collaborator is an opaque JSON source (JSONPlaceholder by
//! default): two list endpoints, no write operations, no caching.

pub mod client;
pub mod error;
pub mod types;

pub use client::Client;
pub use error::{FeedError, Result};
pub use types::{Post, User};
