//! Shared types for the Taskdash web UI
//!
//! View models for API responses, request payloads, and the pure filtering
//! helpers the posts page derives its view from.

use serde::{Deserialize, Serialize};

/// Task view model for the task board
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    /// Human label for the status badge ("in-progress" -> "in progress")
    pub fn status_label(&self) -> String {
        self.status.replace('-', " ")
    }
}

/// Counts over the full task collection
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskStats {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total: usize,
}

/// Task board response: active filter, stats, and the visible tasks
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaskBoard {
    pub filter: String,
    pub stats: TaskStats,
    pub tasks: Vec<Task>,
}

/// Form payload for creating or fully editing a task
#[derive(Clone, Debug, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
}

/// Payload for an inline status change
#[derive(Clone, Debug, Serialize)]
pub struct StatusPayload {
    pub status: String,
}

/// Payload for replacing the active display filter
#[derive(Clone, Debug, Serialize)]
pub struct FilterPayload {
    pub filter: String,
}

/// Post view model (mirrors the remote wire form)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Author view model
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Jointly fetched posts and users
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeedData {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
}

/// Posts visible under the search text and optional author filter
///
/// Search is a case-insensitive substring match against title or body;
/// the author filter is an exact match; both must hold.
pub fn filter_posts(posts: &[Post], search: &str, author: Option<u64>) -> Vec<Post> {
    let needle = search.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let matches_search = needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.body.to_lowercase().contains(&needle);
            let matches_author = author.map(|id| post.user_id == id).unwrap_or(true);
            matches_search && matches_author
        })
        .cloned()
        .collect()
}

/// Users that authored at least one of the given posts
pub fn authors_with_posts(users: &[User], posts: &[Post]) -> Vec<User> {
    users
        .iter()
        .filter(|user| posts.iter().any(|post| post.user_id == user.id))
        .cloned()
        .collect()
}

/// Date part of an RFC 3339 timestamp for compact display
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, user_id: u64, title: &str, body: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_body() {
        let posts = vec![
            post(1, 1, "Release Notes", "shipping soon"),
            post(2, 1, "weekly update", "The RELEASE went out"),
            post(3, 2, "unrelated", "nothing here"),
        ];

        let hits = filter_posts(&posts, "release", None);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.id != 3));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let posts = vec![post(1, 1, "a", "b"), post(2, 2, "c", "d")];
        assert_eq!(filter_posts(&posts, "", None).len(), 2);
    }

    #[test]
    fn test_author_filter_is_exact_and_combines_with_search() {
        let posts = vec![
            post(1, 1, "release notes", "x"),
            post(2, 2, "release notes", "y"),
            post(3, 2, "other", "z"),
        ];

        let by_author = filter_posts(&posts, "", Some(2));
        assert_eq!(by_author.len(), 2);

        let both = filter_posts(&posts, "release", Some(2));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, 2);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let posts = vec![post(1, 1, "a", "b")];
        assert!(filter_posts(&posts, "zzz", None).is_empty());
        assert!(filter_posts(&posts, "", Some(9)).is_empty());
    }

    #[test]
    fn test_authors_with_posts_drops_authors_without_posts() {
        let users = vec![user(1, "Ann"), user(2, "Ben"), user(3, "Cal")];
        let posts = vec![post(1, 1, "a", "b"), post(2, 3, "c", "d")];

        let authors = authors_with_posts(&users, &posts);
        let ids: Vec<u64> = authors.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_status_label_replaces_dashes() {
        let task = Task {
            id: "t".to_string(),
            title: String::new(),
            description: String::new(),
            status: "in-progress".to_string(),
            priority: "high".to_string(),
            due_date: "2025-01-20".to_string(),
            created_at: "2025-01-12T09:00:00Z".to_string(),
            updated_at: "2025-01-12T16:45:00Z".to_string(),
        };
        assert_eq!(task.status_label(), "in progress");
    }

    #[test]
    fn test_short_date_takes_date_part() {
        assert_eq!(short_date("2025-01-12T09:00:00Z"), "2025-01-12");
        assert_eq!(short_date("2025-01-12"), "2025-01-12");
        assert_eq!(short_date("bad"), "bad");
    }
}
