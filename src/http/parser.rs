use std::collections::HashMap;

use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    Incomplete,
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes consumed, or
/// [`ParseError::Incomplete`] when the header block has not fully arrived.
/// Request bodies are not read; the gateway only answers GET.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    };

    Ok((request, headers_end + 4))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
