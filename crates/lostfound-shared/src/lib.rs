//! # Lost & Found Shared
//!
//! Wire types for posts, matching the JSON shape the board's web page used.
//! Kept free of domain dependencies so any front end can compile it.

pub mod dto;

pub use dto::{CreatePostRequest, FeedResponse, PostResponse};
