use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Body length is unknown for lazy streams, so bodies are delimited by
    // connection close.
    buf.extend_from_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes one response: head first, then body chunks as they arrive.
///
/// Pull-then-write per chunk, so the backend is never read faster than the
/// socket accepts. A write error (client gone) aborts the pump; dropping the
/// body stream releases the backend handle.
pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    pub async fn write_to_stream(mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        let head = serialize_head(&self.response);
        stream.write_all(&head).await?;

        loop {
            match self.response.body.next_chunk().await {
                Ok(Some(chunk)) => {
                    stream.write_all(&chunk).await?;
                }
                Ok(None) => break,
                Err(e) => {
                    // Mid-stream backend failure; the head is already out,
                    // so the only available signal is truncation.
                    anyhow::bail!("body stream failed mid-response: {e}");
                }
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
