use std::collections::HashMap;

/// HTTP request methods.
///
/// The gateway only serves GET; other methods are parsed so the connection
/// layer can answer 405 instead of dropping the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    OPTIONS,
    PATCH,
}

impl Method {
    /// Parses an HTTP method from its uppercase wire form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

/// A parsed request line plus headers.
///
/// Request bodies are ignored; the gateway is read-only.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target (e.g. "/cas/Qm.../readme.txt")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
