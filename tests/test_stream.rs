//! Tests for lazy byte streams and the peek primitive

use bytes::Bytes;
use casgate::stream::ByteStream;

#[tokio::test]
async fn test_peek_prefix_is_bounded() {
    let data = vec![7u8; 2048];
    let stream = ByteStream::from_bytes(data.clone());

    let (prefix, rest) = stream.peek(512).await.unwrap();

    assert_eq!(prefix.len(), 512);
    assert_eq!(&prefix[..], &data[..512]);
    assert_eq!(rest.collect().await.unwrap(), data);
}

#[tokio::test]
async fn test_peek_replays_bytes_across_chunk_boundaries() {
    let chunks = vec![
        Bytes::from_static(b"abc"),
        Bytes::from_static(b"defgh"),
        Bytes::from_static(b"ij"),
    ];
    let stream = ByteStream::from_chunks(chunks);

    let (prefix, rest) = stream.peek(4).await.unwrap();

    assert_eq!(&prefix[..], b"abcd");
    // The downstream consumer sees the full original sequence.
    assert_eq!(rest.collect().await.unwrap(), b"abcdefghij");
}

#[tokio::test]
async fn test_peek_on_short_stream_returns_everything() {
    let stream = ByteStream::from_bytes(&b"hi"[..]);

    let (prefix, rest) = stream.peek(512).await.unwrap();

    assert_eq!(&prefix[..], b"hi");
    assert_eq!(rest.collect().await.unwrap(), b"hi");
}

#[tokio::test]
async fn test_peek_on_empty_stream() {
    let stream = ByteStream::empty();

    let (prefix, rest) = stream.peek(512).await.unwrap();

    assert!(prefix.is_empty());
    assert!(rest.collect().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_chunked_stream_collects_in_order() {
    let chunks = vec![Bytes::from_static(b"one"), Bytes::from_static(b"two")];
    let stream = ByteStream::from_chunks(chunks);

    assert_eq!(stream.collect().await.unwrap(), b"onetwo");
}
