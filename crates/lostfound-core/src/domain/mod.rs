//! Domain entities - the core business objects.

mod filter;
mod form;
mod post;

pub use filter::{PostFilter, select};
pub use form::PostSubmission;
pub use post::{ImageRef, NewPost, Post, PostId, PostKind, PostType};
