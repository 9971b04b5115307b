//! Tests for the protocol handler and response formatting

use std::sync::Arc;

use casgate::backend::memory::MemoryBackend;
use casgate::backend::{Backend, BackendError, Listing};
use casgate::gateway::{ProtocolHandler, SchemeRequest};
use casgate::http::response::StatusCode;
use casgate::resolver::PathResolver;
use casgate::resolver::classify::EmptyListingPolicy;
use casgate::stream::ByteStream;
use tokio::sync::oneshot;

fn handler(store: MemoryBackend) -> ProtocolHandler {
    ProtocolHandler::new(PathResolver::new(
        Arc::new(store),
        EmptyListingPolicy::TryRawRead,
    ))
}

#[tokio::test]
async fn test_scheme_url_is_normalized_before_resolution() {
    let mut store = MemoryBackend::new();
    store.insert_file("/cas/Qmabc/readme.txt", "hello");

    let response = handler(store).handle("cas://Qmabc/readme.txt").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("text/plain")
    );
    assert_eq!(response.body.collect().await.unwrap(), b"hello");
}

#[tokio::test]
async fn test_charset_is_appended_to_content_type() {
    let mut store = MemoryBackend::new();
    store.insert_dir("/cas/Qmdocs", &["a.txt"]);
    store.insert_file("/cas/Qmdocs/a.txt", "a");

    let response = handler(store).handle("cas://Qmdocs").await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("text/html; charset=utf8")
    );
}

#[tokio::test]
async fn test_not_found_maps_to_404_with_fixed_body() {
    let response = handler(MemoryBackend::new()).handle("cas://Qmmissing").await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("text/plain")
    );
    assert_eq!(response.body.collect().await.unwrap(), b"Not found");
}

struct FailingBackend;

#[async_trait::async_trait]
impl Backend for FailingBackend {
    async fn list(&self, _path: &str) -> Result<Listing, BackendError> {
        Err(BackendError::Failure("gateway backend is on fire".to_string()))
    }

    async fn open_stream(&self, _path: &str) -> Result<ByteStream, BackendError> {
        Err(BackendError::Failure("gateway backend is on fire".to_string()))
    }
}

#[tokio::test]
async fn test_backend_failure_maps_to_500_with_message_body() {
    let handler = ProtocolHandler::new(PathResolver::new(
        Arc::new(FailingBackend),
        EmptyListingPolicy::TryRawRead,
    ));

    let response = handler.handle("cas://Qmabc").await;

    assert_eq!(response.status, StatusCode::InternalServerError);
    let body = String::from_utf8(response.body.collect().await.unwrap()).unwrap();
    assert!(body.contains("gateway backend is on fire"));
}

#[tokio::test]
async fn test_serve_delivers_exactly_one_reply() {
    let mut store = MemoryBackend::new();
    store.insert_file("/cas/Qmabc/readme.txt", "hello");

    let (tx, rx) = oneshot::channel();
    let request = SchemeRequest {
        url: "cas://Qmabc/readme.txt".to_string(),
        reply: tx,
    };

    handler(store).serve(request).await;

    let response = rx.await.expect("a reply must be delivered");
    assert_eq!(response.status, StatusCode::Ok);
}

#[tokio::test]
async fn test_serve_survives_a_dropped_caller() {
    let mut store = MemoryBackend::new();
    store.insert_file("/cas/Qmabc/readme.txt", "hello");

    let (tx, rx) = oneshot::channel();
    drop(rx);

    let request = SchemeRequest {
        url: "cas://Qmabc/readme.txt".to_string(),
        reply: tx,
    };

    // Must not panic or error; the response is simply discarded.
    handler(store).serve(request).await;
}
