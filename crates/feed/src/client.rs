//! HTTP client for the remote posts/users API

use serde::de::DeserializeOwned;

use crate::error::{FeedError, Result};
use crate::types::{Post, User};

/// Read-only client for the remote feed
///
/// One connection-pooled `reqwest` client per instance; every call is a
/// single GET with no retry and no caching.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all posts
    pub async fn posts(&self) -> Result<Vec<Post>> {
        self.get_json("/posts").await
    }

    /// Fetch all users
    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json("/users").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status { url, status });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = Client::new("https://example.com/");
        assert_eq!(client.base_url(), "https://example.com");

        let client = Client::new("https://example.com");
        assert_eq!(client.base_url(), "https://example.com");
    }
}
