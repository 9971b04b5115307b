//! Backend collaborator surface
//!
//! The content-addressed store is external to this crate. The resolver only
//! needs two operations over the canonical path namespace: a directory
//! listing and a lazy byte read. Both are modeled here as an async trait so
//! the core stays testable against fakes.

pub mod memory;

use crate::stream::ByteStream;

/// One child of a directory listing.
///
/// `path` is the entry's own canonical path as reported by the backend.
/// Listings where every entry carries the same `path` enumerate the chunks
/// of a single file, not directory children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
}

/// Ordered listing for one canonical path. Empty is a valid state.
pub type Listing = Vec<DirectoryEntry>;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend confirms the path does not exist.
    #[error("path does not exist")]
    NotFound,

    /// Any other backend-reported failure, including malformed paths and
    /// transport errors.
    #[error("{0}")]
    Failure(String),
}

/// Read-only view of the content-addressed store.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Lists the entries under `path`.
    async fn list(&self, path: &str) -> Result<Listing, BackendError>;

    /// Opens a lazy byte stream for the object at `path`.
    async fn open_stream(&self, path: &str) -> Result<ByteStream, BackendError>;
}
