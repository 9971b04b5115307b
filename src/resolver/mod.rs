//! Path resolution core
//!
//! Classifies a canonical path as file or directory from its backend
//! listing, locates an index file for directories, and produces the byte
//! stream plus metadata a response needs. Per-request flow:
//!
//! ```text
//! Start → Classifying → { StreamingFile
//!                       | ResolvingIndex → (recurse)
//!                       | RenderingListing } → Done
//! ```
//!
//! No state is retried; the first backend error ends resolution for that
//! request.

pub mod classify;
pub mod dir_view;
pub mod path;
pub mod sniff;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::backend::{Backend, BackendError, Listing};
use crate::http::response::StatusCode;
use crate::resolver::classify::{Classification, EmptyListingPolicy, classify};
use crate::stream::ByteStream;

/// Entry names accepted as a directory's index, matched exactly.
pub const INDEX_NAMES: [&str; 3] = ["index", "index.html", "index.htm"];

/// Guards against a backend where an index entry resolves to a directory
/// indefinitely.
const MAX_INDEX_DEPTH: usize = 8;

const DEFAULT_MIME: &str = "text/plain";

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Backend(BackendError),
}

impl From<BackendError> for ResolveError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound => ResolveError::NotFound,
            other => ResolveError::Backend(other),
        }
    }
}

/// Resolved content for one request: status, media type, and a lazy body.
/// The body is opened at most once and never pre-buffered beyond the
/// sniffing peek.
pub struct ResolvedContent {
    pub status: StatusCode,
    pub mime_type: String,
    pub charset: Option<String>,
    pub body: ByteStream,
}

impl std::fmt::Debug for ResolvedContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedContent")
            .field("status", &self.status)
            .field("mime_type", &self.mime_type)
            .field("charset", &self.charset)
            .finish_non_exhaustive()
    }
}

pub struct PathResolver {
    backend: Arc<dyn Backend>,
    empty_listing: EmptyListingPolicy,
}

impl PathResolver {
    pub fn new(backend: Arc<dyn Backend>, empty_listing: EmptyListingPolicy) -> Self {
        Self {
            backend,
            empty_listing,
        }
    }

    /// Resolves a canonical path to streamable content.
    ///
    /// Fails with [`ResolveError::NotFound`] when the backend reports the
    /// path absent; any other backend error propagates unchanged.
    pub async fn resolve(&self, path: &str) -> Result<ResolvedContent, ResolveError> {
        self.resolve_at(path, 0).await
    }

    // Boxed because index resolution recurses.
    fn resolve_at<'a>(
        &'a self,
        path: &'a str,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Result<ResolvedContent, ResolveError>> + Send + 'a>> {
        Box::pin(async move {
            if depth > MAX_INDEX_DEPTH {
                return Err(ResolveError::Backend(BackendError::Failure(format!(
                    "index resolution exceeded {MAX_INDEX_DEPTH} levels at {path}"
                ))));
            }

            let listing = self.backend.list(path).await?;

            match classify(&listing, self.empty_listing) {
                Classification::File => self.stream_file(path).await,
                Classification::Directory => {
                    self.resolve_directory(path, listing, depth).await
                }
            }
        })
    }

    async fn stream_file(&self, path: &str) -> Result<ResolvedContent, ResolveError> {
        let stream = self.backend.open_stream(path).await?;

        // Peek for sniffing; the returned stream still starts with these bytes.
        let (prefix, body) = stream.peek(sniff::SNIFF_LEN).await?;
        let mime_type =
            sniff::sniff(&prefix, path).unwrap_or_else(|| DEFAULT_MIME.to_string());

        tracing::debug!(path = %path, mime = %mime_type, "streaming file");

        Ok(ResolvedContent {
            status: StatusCode::Ok,
            mime_type,
            charset: None,
            body,
        })
    }

    async fn resolve_directory(
        &self,
        path: &str,
        listing: Listing,
        depth: usize,
    ) -> Result<ResolvedContent, ResolveError> {
        if let Some(index) = listing
            .iter()
            .find(|e| INDEX_NAMES.contains(&e.name.as_str()))
        {
            let child = path::join(path, &index.name);
            tracing::debug!(path = %path, index = %index.name, "descending into index");
            return self.resolve_at(&child, depth + 1).await;
        }

        tracing::debug!(path = %path, entries = listing.len(), "rendering directory listing");

        let page = dir_view::render(&path::to_display(path), &listing);
        Ok(ResolvedContent {
            status: StatusCode::Ok,
            mime_type: "text/html".to_string(),
            charset: Some("utf8".to_string()),
            body: ByteStream::from_bytes(page),
        })
    }
}
