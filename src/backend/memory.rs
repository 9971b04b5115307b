//! In-memory backend
//!
//! A small hash-map store with the listing semantics the resolver has to
//! cope with: directories list their children, single-block files cannot be
//! listed (empty listing), and chunked files list one entry per chunk where
//! every entry reports the file's own path. Used by the demo daemon and by
//! tests; it is not a storage engine.

use std::collections::HashMap;

use bytes::Bytes;

use crate::backend::{Backend, BackendError, DirectoryEntry, Listing};
use crate::resolver::path;
use crate::stream::ByteStream;

enum Node {
    File { chunks: Vec<Bytes> },
    Dir { children: Vec<String> },
}

#[derive(Default)]
pub struct MemoryBackend {
    nodes: HashMap<String, Node>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&mut self, path: &str, data: impl Into<Bytes>) {
        self.nodes.insert(
            path.to_string(),
            Node::File {
                chunks: vec![data.into()],
            },
        );
    }

    /// Stores a file split into explicit chunks. Listing it yields the
    /// uniform-path chunk listing shape.
    pub fn insert_chunked_file(&mut self, path: &str, chunks: Vec<Bytes>) {
        self.nodes.insert(path.to_string(), Node::File { chunks });
    }

    pub fn insert_dir(&mut self, path: &str, children: &[&str]) {
        self.nodes.insert(
            path.to_string(),
            Node::Dir {
                children: children.iter().map(|c| c.to_string()).collect(),
            },
        );
    }
}

#[async_trait::async_trait]
impl Backend for MemoryBackend {
    async fn list(&self, p: &str) -> Result<Listing, BackendError> {
        match self.nodes.get(p) {
            None => Err(BackendError::NotFound),
            Some(Node::Dir { children }) => Ok(children
                .iter()
                .map(|name| DirectoryEntry {
                    name: name.clone(),
                    path: path::join(p, name),
                })
                .collect()),
            Some(Node::File { chunks }) if chunks.len() > 1 => Ok(chunks
                .iter()
                .map(|_| DirectoryEntry {
                    name: String::new(),
                    path: p.to_string(),
                })
                .collect()),
            Some(Node::File { .. }) => Ok(Vec::new()),
        }
    }

    async fn open_stream(&self, p: &str) -> Result<ByteStream, BackendError> {
        match self.nodes.get(p) {
            None => Err(BackendError::NotFound),
            Some(Node::Dir { .. }) => {
                Err(BackendError::Failure(format!("{p} is a directory")))
            }
            Some(Node::File { chunks }) => Ok(ByteStream::from_chunks(chunks.clone())),
        }
    }
}
