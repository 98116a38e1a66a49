use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier of a post, assigned when the post is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether an item was lost or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Lost,
    Found,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Lost => "lost",
            PostType::Found => "found",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lost" => Ok(PostType::Lost),
            "found" => Ok(PostType::Found),
            _ => Err(DomainError::InvalidPostType(s.trim().to_string())),
        }
    }
}

/// Type-specific part of a post.
///
/// Only found items have a current location (where the finder is keeping
/// the item), so a found post without one cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostKind {
    Lost,
    Found { current_location: String },
}

impl PostKind {
    pub fn post_type(&self) -> PostType {
        match self {
            PostKind::Lost => PostType::Lost,
            PostKind::Found { .. } => PostType::Found,
        }
    }

    pub fn current_location(&self) -> Option<&str> {
        match self {
            PostKind::Lost => None,
            PostKind::Found { current_location } => Some(current_location),
        }
    }
}

/// Reference to an image attached to a post. It is displayed as-is and
/// never uploaded or fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A post as submitted, before the store assigns its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact_info: String,
    pub image: Option<ImageRef>,
}

impl NewPost {
    /// Report of an item someone lost at `location`.
    pub fn lost(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            kind: PostKind::Lost,
            title: title.into(),
            description: description.into(),
            location: location.into(),
            contact_info: contact_info.into(),
            image: None,
        }
    }

    /// Report of an item found at `location`, now kept at `current_location`.
    pub fn found(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        current_location: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            kind: PostKind::Found {
                current_location: current_location.into(),
            },
            title: title.into(),
            description: description.into(),
            location: location.into(),
            contact_info: contact_info.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    pub fn post_type(&self) -> PostType {
        self.kind.post_type()
    }
}

/// Post entity - a single lost or found item report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub kind: PostKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact_info: String,
    pub image: Option<ImageRef>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Finalize a submitted post with a fresh id and the current time.
    pub fn new(new_post: NewPost) -> Self {
        Self::with_identity(new_post, PostId::new(), Utc::now())
    }

    /// Finalize a submitted post with a known id and creation time.
    pub fn with_identity(new_post: NewPost, id: PostId, created_at: DateTime<Utc>) -> Self {
        let NewPost {
            kind,
            title,
            description,
            location,
            contact_info,
            image,
        } = new_post;

        Self {
            id,
            kind,
            title,
            description,
            location,
            contact_info,
            image,
            created_at,
        }
    }

    pub fn post_type(&self) -> PostType {
        self.kind.post_type()
    }

    pub fn current_location(&self) -> Option<&str> {
        self.kind.current_location()
    }
}
