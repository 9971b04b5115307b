//! Protocol handler: scheme URL in, exactly one response out.
//!
//! This is the entry point the `cas://` scheme registration calls. It
//! normalizes the URL, runs resolution, and maps the outcome — success,
//! absence, or backend failure — onto a response. `handle` is total, so the
//! one-response-per-request invariant holds by construction even when
//! resolution fails partway through a recursive index chain.

use tokio::sync::oneshot;

use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::resolver::{PathResolver, ResolveError, ResolvedContent, path};

/// An inbound scheme request: the raw URL plus its one-shot reply sink.
pub struct SchemeRequest {
    pub url: String,
    pub reply: oneshot::Sender<Response>,
}

pub struct ProtocolHandler {
    resolver: PathResolver,
}

impl ProtocolHandler {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// Resolves `raw_url` and formats the outcome.
    ///
    /// Never fails: `NotFound` becomes a 404 with the fixed body
    /// `"Not found"`, any other resolution error becomes a 500 carrying the
    /// error's message text.
    pub async fn handle(&self, raw_url: &str) -> Response {
        let path = path::normalize(raw_url);
        tracing::info!(url = %raw_url, path = %path, "handling request");

        match self.resolver.resolve(&path).await {
            Ok(content) => format_content(content),
            Err(ResolveError::NotFound) => {
                tracing::info!(path = %path, "not found");
                Response::text(StatusCode::NotFound, "Not found")
            }
            Err(err) => {
                tracing::error!(path = %path, error = %err, "resolution failed");
                Response::text(StatusCode::InternalServerError, &err.to_string())
            }
        }
    }

    /// Serves one request against its reply sink.
    ///
    /// The oneshot sender is consumed by the send, so a second reply is
    /// unrepresentable. A dropped receiver means the caller navigated away;
    /// the response (and its backend stream) is dropped with it.
    pub async fn serve(&self, request: SchemeRequest) {
        let response = self.handle(&request.url).await;
        if request.reply.send(response).is_err() {
            tracing::debug!(url = %request.url, "caller went away before the reply");
        }
    }
}

fn format_content(content: ResolvedContent) -> Response {
    let content_type = match &content.charset {
        Some(charset) => format!("{}; charset={}", content.mime_type, charset),
        None => content.mime_type.clone(),
    };

    ResponseBuilder::new(content.status)
        .header("Content-Type", content_type)
        .body(content.body)
        .build()
}
