use serde::{Deserialize, Serialize};

use super::post::{ImageRef, NewPost, PostKind, PostType};
use crate::error::DomainError;

/// The create-post form as the user filled it in.
///
/// Text is kept exactly as entered until [`PostSubmission::validate`]
/// turns it into a [`NewPost`]. Blank means empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSubmission {
    pub post_type: PostType,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Only read for found items.
    pub current_location: String,
    pub contact_info: String,
    pub image: Option<String>,
}

impl PostSubmission {
    /// An empty form for the given post type.
    pub fn new(post_type: PostType) -> Self {
        Self {
            post_type,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            current_location: String::new(),
            contact_info: String::new(),
            image: None,
        }
    }

    /// Label of the location field, which depends on the post type.
    pub fn location_prompt(post_type: PostType) -> &'static str {
        match post_type {
            PostType::Lost => "Where did you lose it?",
            PostType::Found => "Where did you find it?",
        }
    }

    /// Check required fields and build the post payload.
    ///
    /// Every missing field is reported at once, in form order. The current
    /// location is required for found items and discarded for lost ones.
    pub fn validate(self) -> Result<NewPost, DomainError> {
        let mut missing = Vec::new();

        let mut required = |name: &'static str, value: &str| {
            if value.trim().is_empty() {
                missing.push(name);
            }
        };

        required("title", &self.title);
        required("description", &self.description);
        required("location", &self.location);
        if self.post_type == PostType::Found {
            required("current location", &self.current_location);
        }
        required("contact info", &self.contact_info);

        if !missing.is_empty() {
            return Err(DomainError::MissingFields(missing));
        }

        let kind = match self.post_type {
            PostType::Lost => PostKind::Lost,
            PostType::Found => PostKind::Found {
                current_location: self.current_location.trim().to_string(),
            },
        };

        let image = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
            .map(ImageRef::new);

        Ok(NewPost {
            kind,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            contact_info: self.contact_info.trim().to_string(),
            image,
        })
    }
}
