//! HTTP surface of the gateway daemon.
//!
//! A deliberately small HTTP/1.1 server: it exists to carry resolved
//! content-addressed responses to a local client, not to be a general web
//! server. Bodies are lazy streams of unknown length, so every response is
//! close-delimited (`Connection: close`) and each connection serves one
//! request.
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request head
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Resolving      │ ← Protocol handler produces a Response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │   Streaming      │ ← Pump body chunks to the client
//!        └──────┬───────────┘
//!               │ Stream drained or client gone
//!               ▼
//!            Closed
//! ```
//!
//! Submodules:
//!
//! - **`connection`**: per-connection state machine
//! - **`parser`**: incremental request-head parsing
//! - **`request`**: parsed request representation
//! - **`response`**: status codes and the streaming response type
//! - **`writer`**: serializes the head, then pumps the body stream

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
