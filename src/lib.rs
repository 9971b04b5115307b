//! casgate - Content-Addressed Scheme Gateway
//!
//! Resolves `cas://` URLs against an immutable, hash-addressed store and
//! answers with HTTP-style streaming responses.

pub mod backend;
pub mod config;
pub mod gateway;
pub mod http;
pub mod resolver;
pub mod server;
pub mod stream;
