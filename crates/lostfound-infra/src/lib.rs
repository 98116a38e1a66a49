//! # Lost & Found Infrastructure
//!
//! Concrete implementations of the ports defined in `lostfound-core`.
//! Everything lives in process memory; nothing outlives the session.

pub mod seed;
pub mod store;

pub use seed::sample_posts;
pub use store::InMemoryPostStore;
