//! Board session - the active filter and the create-post modal.

use std::sync::Arc;

use lostfound_core::DomainError;
use lostfound_core::domain::{Post, PostFilter, PostSubmission, PostType, select};
use lostfound_core::ports::PostStore;

/// Where the create-post modal is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Open, asking whether the item was lost or found.
    ChoosingType,
    /// Showing the form for one post type.
    Editing(PostType),
}

/// Interaction state of one board session.
///
/// Owns a handle to the store; every mutation of the feed goes through
/// [`BoardSession::submit`].
pub struct BoardSession {
    store: Arc<dyn PostStore>,
    filter: PostFilter,
    modal: ModalState,
}

impl BoardSession {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            filter: PostFilter::default(),
            modal: ModalState::default(),
        }
    }

    pub fn active_filter(&self) -> PostFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: PostFilter) {
        if self.filter != filter {
            tracing::debug!(from = %self.filter, to = %filter, "Filter changed");
        }
        self.filter = filter;
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn open_modal(&mut self) {
        self.transition(ModalState::ChoosingType);
    }

    /// Show the form for `post_type`, opening the modal if needed.
    pub fn choose_type(&mut self, post_type: PostType) {
        self.transition(ModalState::Editing(post_type));
    }

    /// Go back one step: form to type choice, type choice to closed.
    pub fn cancel(&mut self) {
        let previous = match self.modal {
            ModalState::Editing(_) => ModalState::ChoosingType,
            ModalState::ChoosingType | ModalState::Closed => ModalState::Closed,
        };
        self.transition(previous);
    }

    pub fn close_modal(&mut self) {
        self.transition(ModalState::Closed);
    }

    /// Validate and store a filled-in form.
    ///
    /// The modal must be showing the form for the submission's type. It
    /// closes on success and stays open when validation fails.
    pub async fn submit(&mut self, submission: PostSubmission) -> Result<Post, DomainError> {
        if self.modal != ModalState::Editing(submission.post_type) {
            return Err(DomainError::ModalNotEditing);
        }

        let new_post = submission.validate().inspect_err(|e| {
            tracing::info!(error = %e, "Post submission rejected");
        })?;

        let post = self.store.append(new_post).await;
        tracing::info!(post_id = %post.id, post_type = %post.post_type(), "Post created");

        self.close_modal();
        Ok(post)
    }

    /// The feed under the active filter, newest first.
    pub async fn visible_posts(&self) -> Vec<Post> {
        let posts = self.store.all().await;
        select(&posts, self.filter).into_iter().cloned().collect()
    }

    fn transition(&mut self, next: ModalState) {
        if self.modal != next {
            tracing::debug!(from = ?self.modal, to = ?next, "Modal state changed");
        }
        self.modal = next;
    }
}
