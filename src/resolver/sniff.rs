//! MIME sniffing from path extension and leading bytes.

/// Upper bound on how many bytes the resolver peeks for sniffing.
pub const SNIFF_LEN: usize = 512;

/// Guesses a media type for the object at `path` whose stream starts with
/// `prefix`. Extension mapping wins when it is conclusive; otherwise the
/// prefix is checked for known magic signatures. `None` means undetermined.
pub fn sniff(prefix: &[u8], path: &str) -> Option<String> {
    if let Some(mime) = mime_guess::from_path(path).first_raw() {
        return Some(mime.to_string());
    }
    sniff_magic(&prefix[..prefix.len().min(SNIFF_LEN)])
}

const SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
];

fn sniff_magic(prefix: &[u8]) -> Option<String> {
    for (magic, mime) in SIGNATURES {
        if prefix.starts_with(magic) {
            return Some((*mime).to_string());
        }
    }

    // HTML documents may open with whitespace and arbitrary tag case.
    let head = String::from_utf8_lossy(prefix);
    let head = head.trim_start().to_ascii_lowercase();
    if head.starts_with("<html") || head.starts_with("<!doctype html") {
        return Some("text/html".to_string());
    }

    None
}
