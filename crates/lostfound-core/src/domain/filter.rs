use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::post::{Post, PostType};
use crate::error::DomainError;

/// The category used to narrow the visible feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl PostFilter {
    /// Every filter, in the order the header shows them.
    pub const ALL: [PostFilter; 3] = [PostFilter::All, PostFilter::Lost, PostFilter::Found];

    /// Whether `post` is visible under this filter.
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::Lost => post.post_type() == PostType::Lost,
            PostFilter::Found => post.post_type() == PostType::Found,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostFilter::All => "all",
            PostFilter::Lost => "lost",
            PostFilter::Found => "found",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            PostFilter::All => "All",
            PostFilter::Lost => "Lost",
            PostFilter::Found => "Found",
        }
    }
}

impl From<PostType> for PostFilter {
    fn from(post_type: PostType) -> Self {
        match post_type {
            PostType::Lost => PostFilter::Lost,
            PostType::Found => PostFilter::Found,
        }
    }
}

impl fmt::Display for PostFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PostFilter::All),
            "lost" => Ok(PostFilter::Lost),
            "found" => Ok(PostFilter::Found),
            _ => Err(DomainError::InvalidFilter(s.trim().to_string())),
        }
    }
}

/// Narrow `posts` to those visible under `filter`, keeping their order.
pub fn select(posts: &[Post], filter: PostFilter) -> Vec<&Post> {
    posts.iter().filter(|post| filter.matches(post)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn lost(title: &str) -> Post {
        Post::new(NewPost::lost(title, "desc", "Library", "contact"))
    }

    fn found(title: &str) -> Post {
        Post::new(NewPost::found(title, "desc", "Canteen", "Office", "contact"))
    }

    fn titles(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let posts = vec![lost("A"), found("B"), lost("C"), found("D")];
        let selected = select(&posts, PostFilter::All);
        let expected: Vec<&Post> = posts.iter().collect();
        assert_eq!(selected, expected);
    }

    #[test]
    fn test_type_filters_preserve_order() {
        let posts = vec![lost("C"), lost("A"), found("B")];
        assert_eq!(titles(&select(&posts, PostFilter::Lost)), vec!["C", "A"]);
        assert_eq!(titles(&select(&posts, PostFilter::Found)), vec!["B"]);
    }

    #[test]
    fn test_lost_and_found_partition_the_feed() {
        let posts = vec![found("1"), lost("2"), lost("3"), found("4"), lost("5")];
        let lost_ids: Vec<_> = select(&posts, PostFilter::Lost).iter().map(|p| p.id).collect();
        let found_ids: Vec<_> = select(&posts, PostFilter::Found).iter().map(|p| p.id).collect();

        assert_eq!(lost_ids.len() + found_ids.len(), posts.len());
        assert!(lost_ids.iter().all(|id| !found_ids.contains(id)));
        assert!(posts.iter().all(|p| lost_ids.contains(&p.id) || found_ids.contains(&p.id)));
    }

    #[test]
    fn test_select_is_idempotent() {
        let posts = vec![lost("A"), found("B"), lost("C")];
        let once: Vec<Post> = select(&posts, PostFilter::Lost).into_iter().cloned().collect();
        let twice: Vec<Post> = select(&once, PostFilter::Lost).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_feed() {
        for filter in PostFilter::ALL {
            assert!(select(&[], filter).is_empty());
        }
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<PostFilter>(), Ok(PostFilter::All));
        assert_eq!("LOST".parse::<PostFilter>(), Ok(PostFilter::Lost));
        assert_eq!(" found\n".parse::<PostFilter>(), Ok(PostFilter::Found));
        assert_eq!(
            "misc".parse::<PostFilter>(),
            Err(DomainError::InvalidFilter("misc".to_string()))
        );
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(PostFilter::default(), PostFilter::All);
        assert_eq!(PostFilter::Found.to_string(), "found");
        assert_eq!(PostFilter::from(PostType::Lost), PostFilter::Lost);
    }
}
