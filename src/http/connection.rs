use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::gateway::ProtocolHandler;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    handler: Arc<ProtocolHandler>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Resolving(Request),
    Streaming(Response),
    Closed,
}

pub enum ReadOutcome {
    Request(Request),
    Malformed,
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, handler: Arc<ProtocolHandler>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through `Reading → Resolving → Streaming →
    /// Closed`. One request per connection: stream bodies are close-delimited.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        ReadOutcome::Request(req) => {
                            self.state = ConnectionState::Resolving(req);
                        }
                        ReadOutcome::Malformed => {
                            let response =
                                Response::text(StatusCode::BadRequest, "Bad request");
                            self.state = ConnectionState::Streaming(response);
                        }
                        ReadOutcome::Closed => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Resolving(req) => {
                    let response = if req.method == Method::GET {
                        self.handler.handle(&req.path).await
                    } else {
                        Response::text(StatusCode::MethodNotAllowed, "Method not allowed")
                    };

                    self.state = ConnectionState::Streaming(response);
                }

                ConnectionState::Streaming(response) => {
                    let writer = ResponseWriter::new(response);
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed head: answer 400 before closing.
                    tracing::debug!("HTTP parse error: {:?}", e);
                    return Ok(ReadOutcome::Malformed);
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection
                return Ok(ReadOutcome::Closed);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
