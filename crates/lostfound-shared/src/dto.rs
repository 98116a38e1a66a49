//! Data Transfer Objects - JSON shapes of posts and feeds.

use serde::{Deserialize, Serialize};

/// Request to create a post, as the form submits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// `"lost"` or `"found"`.
    #[serde(rename = "type")]
    pub post_type: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub current_location: Option<String>,
    pub contact_info: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    pub contact_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// RFC 3339.
    pub created_at: String,
}

/// The visible feed under a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub filter: String,
    pub count: usize,
    pub posts: Vec<PostResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_page_payload() {
        let json = r#"{
            "type": "found",
            "title": "Found Student ID Card",
            "description": "Found a student ID card near the canteen.",
            "location": "Main Canteen",
            "currentLocation": "Student Affairs Office",
            "contactInfo": "Admin Office"
        }"#;

        let req: CreatePostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.post_type, "found");
        assert_eq!(req.current_location.as_deref(), Some("Student Affairs Office"));
        assert_eq!(req.contact_info, "Admin Office");
        assert_eq!(req.image, None);
    }

    #[test]
    fn test_post_response_omits_absent_optionals() {
        let post = PostResponse {
            id: "1".to_string(),
            post_type: "lost".to_string(),
            title: "Lost Calculator".to_string(),
            description: "Scientific calculator".to_string(),
            location: "Physics Lab".to_string(),
            current_location: None,
            contact_info: "Mike".to_string(),
            image: None,
            created_at: "2023-10-09T00:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["type"], "lost");
        assert_eq!(value["contactInfo"], "Mike");
        assert_eq!(value["createdAt"], "2023-10-09T00:00:00+00:00");
        assert!(value.get("currentLocation").is_none());
        assert!(value.get("image").is_none());
    }
}
