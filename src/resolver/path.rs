//! Canonical path handling for the `cas://` scheme.

/// External scheme token.
pub const SCHEME: &str = "cas://";

/// Fixed namespace prefix every canonical path starts with.
pub const NAMESPACE: &str = "/cas";

/// Turns a scheme URL into the canonical backend path.
///
/// Total: malformed input still yields a path string, which the backend
/// rejects later if invalid. The scheme authority is case-sensitive (it is
/// a content hash), so this never round-trips through a URL parser.
pub fn normalize(raw_url: &str) -> String {
    let path = match raw_url.strip_prefix(SCHEME) {
        Some(rest) => format!("/{rest}"),
        None if raw_url.starts_with('/') => raw_url.to_string(),
        None => format!("/{raw_url}"),
    };

    match path.strip_prefix(NAMESPACE) {
        // Namespace must end at a segment boundary, not a lookalike prefix.
        Some(rest) if rest.is_empty() || rest.starts_with('/') => path,
        _ => format!("{NAMESPACE}{path}"),
    }
}

/// Joins a listing entry name onto its parent path.
pub fn join(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name)
}

/// Swaps the namespace prefix back to the scheme token for display.
/// Cosmetic only; resolution always uses the canonical form.
pub fn to_display(path: &str) -> String {
    match path.strip_prefix(NAMESPACE) {
        Some(rest) if rest.starts_with('/') => format!("{SCHEME}{}", &rest[1..]),
        _ => path.to_string(),
    }
}
