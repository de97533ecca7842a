//! Wire types for the remote posts/users API
//!
//! Unknown fields are ignored; the remote records carry more than we read.

use serde::{Deserialize, Serialize};

/// A post as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// An author as returned by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post() {
        let json = r#"{"userId":1,"id":2,"title":"qui est esse","body":"est rerum tempore"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.id, 2);
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "qui est esse");
    }

    #[test]
    fn test_parse_user_ignores_unknown_fields() {
        let json = r#"{
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "address": {"street": "Douglas Extension", "city": "McKenziehaven"},
            "phone": "1-463-123-4447",
            "company": {"name": "Romaguera-Jacobson"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.username, "Samantha");
        assert_eq!(user.email, "Nathan@yesenia.net");
    }

    #[test]
    fn test_post_serializes_wire_field_names() {
        let post = Post {
            id: 1,
            user_id: 7,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"userId\":7"));
    }
}
