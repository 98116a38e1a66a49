//! Mapping between domain posts and their JSON shapes.

use lostfound_core::DomainError;
use lostfound_core::domain::{Post, PostFilter, PostSubmission};
use lostfound_shared::{CreatePostRequest, FeedResponse, PostResponse};

pub fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        post_type: post.post_type().to_string(),
        title: post.title.clone(),
        description: post.description.clone(),
        location: post.location.clone(),
        current_location: post.current_location().map(str::to_string),
        contact_info: post.contact_info.clone(),
        image: post.image.as_ref().map(|image| image.to_string()),
        created_at: post.created_at.to_rfc3339(),
    }
}

pub fn feed_response(filter: PostFilter, posts: &[Post]) -> FeedResponse {
    FeedResponse {
        filter: filter.to_string(),
        count: posts.len(),
        posts: posts.iter().map(post_response).collect(),
    }
}

/// Turn a create request into a form submission; validation happens later.
pub fn submission_from_request(req: CreatePostRequest) -> Result<PostSubmission, DomainError> {
    Ok(PostSubmission {
        post_type: req.post_type.parse()?,
        title: req.title,
        description: req.description,
        location: req.location,
        current_location: req.current_location.unwrap_or_default(),
        contact_info: req.contact_info,
        image: req.image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound_core::domain::{ImageRef, NewPost, PostType};

    fn request(post_type: &str) -> CreatePostRequest {
        CreatePostRequest {
            post_type: post_type.to_string(),
            title: "Found Umbrella".to_string(),
            description: "Black folding umbrella".to_string(),
            location: "Bus stop".to_string(),
            current_location: Some("Security cabin".to_string()),
            contact_info: "Ravi".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_found_post_response() {
        let post = Post::new(
            NewPost::found("Keys", "Silver", "Gym", "Front desk", "Amy")
                .with_image(ImageRef::new("/keys.png")),
        );
        let dto = post_response(&post);
        assert_eq!(dto.id, post.id.to_string());
        assert_eq!(dto.post_type, "found");
        assert_eq!(dto.current_location.as_deref(), Some("Front desk"));
        assert_eq!(dto.image.as_deref(), Some("/keys.png"));
    }

    #[test]
    fn test_lost_post_response_has_no_current_location() {
        let post = Post::new(NewPost::lost("Keys", "Silver", "Gym", "Amy"));
        let dto = post_response(&post);
        assert_eq!(dto.post_type, "lost");
        assert_eq!(dto.current_location, None);
        assert_eq!(dto.image, None);
    }

    #[test]
    fn test_feed_response_counts_posts() {
        let posts = vec![
            Post::new(NewPost::lost("A", "d", "l", "c")),
            Post::new(NewPost::lost("B", "d", "l", "c")),
        ];
        let feed = feed_response(PostFilter::Lost, &posts);
        assert_eq!(feed.filter, "lost");
        assert_eq!(feed.count, 2);
        assert_eq!(feed.posts[1].title, "B");
    }

    #[test]
    fn test_submission_from_request() {
        let submission = submission_from_request(request("found")).unwrap();
        assert_eq!(submission.post_type, PostType::Found);
        assert_eq!(submission.current_location, "Security cabin");
    }

    #[test]
    fn test_submission_rejects_unknown_type() {
        assert_eq!(
            submission_from_request(request("misplaced")),
            Err(DomainError::InvalidPostType("misplaced".to_string()))
        );
    }
}
