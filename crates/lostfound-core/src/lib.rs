//! # Lost & Found Core
//!
//! The domain layer of the lost and found board.
//! This crate contains the post model, feed filtering and form validation,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
