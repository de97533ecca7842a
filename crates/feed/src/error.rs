//! Error types for the feed client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
