//! Tests for the connection state machine over a local socket

use std::sync::Arc;

use casgate::backend::memory::MemoryBackend;
use casgate::gateway::ProtocolHandler;
use casgate::http::connection::Connection;
use casgate::resolver::PathResolver;
use casgate::resolver::classify::EmptyListingPolicy;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn serve_one(store: MemoryBackend) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handler = Arc::new(ProtocolHandler::new(PathResolver::new(
        Arc::new(store),
        EmptyListingPolicy::TryRawRead,
    )));

    tokio::spawn(async move {
        let (socket, _peer) = listener.accept().await.unwrap();
        let conn = Connection::new(socket, handler);
        let _ = conn.run().await;
    });

    addr
}

async fn roundtrip(addr: std::net::SocketAddr, raw: &[u8]) -> String {
    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(raw).await.unwrap();

    let mut out = String::new();
    client.read_to_string(&mut out).await.unwrap();
    out
}

#[tokio::test]
async fn test_get_streams_file_and_closes() {
    let mut store = MemoryBackend::new();
    store.insert_file("/cas/Qmabc/readme.txt", "hello");
    let addr = serve_one(store).await;

    let reply = roundtrip(addr, b"GET /cas/Qmabc/readme.txt HTTP/1.1\r\nHost: x\r\n\r\n").await;

    assert!(reply.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(reply.contains("Content-Type: text/plain\r\n"));
    assert!(reply.contains("Connection: close\r\n"));
    assert!(reply.ends_with("hello"));
}

#[tokio::test]
async fn test_malformed_head_answers_400() {
    let addr = serve_one(MemoryBackend::new()).await;

    let reply = roundtrip(addr, b"NOT AN HTTP REQUEST\r\n\r\n").await;

    assert!(reply.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(reply.ends_with("Bad request"));
}

#[tokio::test]
async fn test_non_get_answers_405() {
    let addr = serve_one(MemoryBackend::new()).await;

    let reply = roundtrip(addr, b"POST /cas/Qmabc HTTP/1.1\r\nHost: x\r\n\r\n").await;

    assert!(reply.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
}
