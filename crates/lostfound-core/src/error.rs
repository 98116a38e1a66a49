//! Domain-level error types.

use thiserror::Error;

/// Domain errors - rejected input and out-of-order interactions.
///
/// The post store has no error type: appending and reading cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Unknown filter '{0}' (expected all, lost or found)")]
    InvalidFilter(String),

    #[error("Unknown post type '{0}' (expected lost or found)")]
    InvalidPostType(String),

    #[error("No post form is open for this post type")]
    ModalNotEditing,
}
