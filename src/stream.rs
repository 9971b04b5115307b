//! Lazy byte sequences and the peek/tee primitive.
//!
//! Backend reads are pull-based: the consumer asks for the next chunk and
//! suspends until it arrives, so backpressure is inherent and dropping a
//! [`ByteStream`] releases the underlying source. [`ByteStream::peek`]
//! implements the sniffing contract: it buffers at most the requested
//! prefix, then hands back a stream that replays those bytes, in order,
//! ahead of the remainder.

use std::collections::VecDeque;

use bytes::Bytes;

use crate::backend::BackendError;

/// A producer of byte chunks, typically backed by a backend read.
#[async_trait::async_trait]
pub trait ByteSource: Send {
    /// Pulls the next chunk. `Ok(None)` signals end of stream.
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, BackendError>;
}

/// A lazy stream of byte chunks.
pub struct ByteStream {
    inner: Box<dyn ByteSource>,
}

impl ByteStream {
    pub fn new(source: impl ByteSource + 'static) -> Self {
        Self {
            inner: Box::new(source),
        }
    }

    /// A stream yielding the given buffer as a single chunk.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::new(ChunkSource::new(vec![data.into()]))
    }

    /// A stream yielding the given chunks in order.
    pub fn from_chunks(chunks: Vec<Bytes>) -> Self {
        Self::new(ChunkSource::new(chunks))
    }

    pub fn empty() -> Self {
        Self::new(ChunkSource::new(Vec::new()))
    }

    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>, BackendError> {
        self.inner.next_chunk().await
    }

    /// Reads up to `limit` bytes ahead without consuming them.
    ///
    /// Returns the peeked prefix and a stream that delivers the original
    /// sequence unaltered, starting with the buffered bytes. Buffering is
    /// bounded by the chunk that crosses `limit`, never the whole stream.
    pub async fn peek(mut self, limit: usize) -> Result<(Bytes, ByteStream), BackendError> {
        let mut buffered: VecDeque<Bytes> = VecDeque::new();
        let mut total = 0;

        while total < limit {
            match self.inner.next_chunk().await? {
                Some(chunk) => {
                    total += chunk.len();
                    buffered.push_back(chunk);
                }
                None => break,
            }
        }

        let mut prefix = Vec::with_capacity(total.min(limit));
        for chunk in &buffered {
            let take = (limit - prefix.len()).min(chunk.len());
            prefix.extend_from_slice(&chunk[..take]);
            if prefix.len() == limit {
                break;
            }
        }

        let replay = Replay {
            buffered,
            inner: self.inner,
        };
        Ok((Bytes::from(prefix), ByteStream::new(replay)))
    }

    /// Drains the stream into memory. Intended for small bodies and tests.
    pub async fn collect(mut self) -> Result<Vec<u8>, BackendError> {
        let mut out = Vec::new();
        while let Some(chunk) = self.next_chunk().await? {
            out.extend_from_slice(&chunk);
        }
        Ok(out)
    }
}

/// In-memory source over a fixed chunk sequence.
struct ChunkSource {
    chunks: VecDeque<Bytes>,
}

impl ChunkSource {
    fn new(chunks: Vec<Bytes>) -> Self {
        Self {
            chunks: chunks.into(),
        }
    }
}

#[async_trait::async_trait]
impl ByteSource for ChunkSource {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, BackendError> {
        Ok(self.chunks.pop_front())
    }
}

/// Replays buffered chunks before resuming the wrapped source.
struct Replay {
    buffered: VecDeque<Bytes>,
    inner: Box<dyn ByteSource>,
}

#[async_trait::async_trait]
impl ByteSource for Replay {
    async fn next_chunk(&mut self) -> Result<Option<Bytes>, BackendError> {
        if let Some(chunk) = self.buffered.pop_front() {
            return Ok(Some(chunk));
        }
        self.inner.next_chunk().await
    }
}
