//! In-memory post store - the only store the board has.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use lostfound_core::domain::{NewPost, Post};
use lostfound_core::ports::PostStore;

/// In-memory post store using a deque with async RwLock.
///
/// New posts go to the front, so iteration order is reverse insertion
/// order. Posts are never edited or removed.
/// Note: Data is lost on process exit.
pub struct InMemoryPostStore {
    posts: RwLock<VecDeque<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(VecDeque::new()),
        }
    }

    /// Build a store already holding `posts`, in the given order.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: RwLock::new(posts.into_iter().collect()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn append(&self, new_post: NewPost) -> Post {
        let post = Post::new(new_post);

        let mut posts = self.posts.write().await;
        posts.push_front(post.clone());

        tracing::debug!(
            post_id = %post.id,
            post_type = %post.post_type(),
            total = posts.len(),
            "Post appended"
        );

        post
    }

    async fn all(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        posts.iter().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.posts.read().await.len()
    }
}
