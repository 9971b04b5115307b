//! File/directory classification from listing shape.
//!
//! Backend revisions disagree on what a listing means for a file, so the
//! decision is an explicit policy selected at resolver construction, not a
//! branch buried in resolution. The single-entry and uniform-path rules are
//! stable across revisions; only the empty-listing case is configurable.

use serde::Deserialize;

use crate::backend::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    File,
    Directory,
}

/// What an empty listing means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyListingPolicy {
    /// The backend cannot list files at all: an empty listing is not a
    /// directory, so attempt a raw stream read.
    #[default]
    TryRawRead,

    /// The backend returns at least an empty listing for every directory
    /// and errors on files: any listing denotes a directory.
    Directory,
}

/// Pure classification of a listing under the given empty-listing policy.
pub fn classify(listing: &Listing, empty: EmptyListingPolicy) -> Classification {
    match listing.len() {
        0 => match empty {
            EmptyListingPolicy::TryRawRead => Classification::File,
            EmptyListingPolicy::Directory => Classification::Directory,
        },
        1 => Classification::Directory,
        _ => {
            // Entries that all report the same path enumerate the chunks
            // of one file, not directory children.
            let first = &listing[0].path;
            if listing.iter().all(|e| &e.path == first) {
                Classification::File
            } else {
                Classification::Directory
            }
        }
    }
}
