//! Credential store
//!
//! Owns the in-memory credential map and keeps it synchronized with the
//! backing htpasswd file.

pub mod file;
pub mod metadata;

pub use file::HtpasswdFile;
pub use metadata::FileMetadata;
