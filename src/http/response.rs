use std::collections::HashMap;

use crate::stream::ByteStream;

/// HTTP status codes the gateway emits.
///
/// - `Ok` (200): resolution succeeded
/// - `BadRequest` (400): malformed request head
/// - `NotFound` (404): backend confirms the path does not exist
/// - `MethodNotAllowed` (405): anything other than GET
/// - `InternalServerError` (500): any other backend failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete response: status, headers, and a lazy body.
///
/// The body is a [`ByteStream`], so constructing a `Response` never buffers
/// content; bytes flow when the writer pumps them to the sink.
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Lazy response body
    pub body: ByteStream,
}

/// Builder for constructing responses in a fluent style.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: ByteStream,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: ByteStream::empty(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body stream.
    pub fn body(mut self, body: ByteStream) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A `text/plain` response with a fixed message body.
    pub fn text(status: StatusCode, message: &str) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", "text/plain")
            .body(ByteStream::from_bytes(message.as_bytes().to_vec()))
            .build()
    }
}
