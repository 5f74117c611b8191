//! Error handling
//!
//! Defines error types for the htpasswd credential store.

pub mod types;

pub use types::*;
