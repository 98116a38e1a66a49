use async_trait::async_trait;

use crate::domain::{NewPost, Post};

/// Post store - the session's collection of posts, newest first.
///
/// Implementations assign ids and timestamps but do not validate content;
/// that is the job of [`crate::domain::PostSubmission`]. None of these
/// operations can fail.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Finalize `new_post` with a fresh id and the current time and put it
    /// at the front of the collection.
    async fn append(&self, new_post: NewPost) -> Post;

    /// All posts, most recently appended first.
    async fn all(&self) -> Vec<Post>;

    /// Number of posts held.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
