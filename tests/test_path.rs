//! Tests for scheme URL normalization

use casgate::resolver::path::{join, normalize, to_display};

#[test]
fn test_normalize_strips_scheme_and_prefixes_namespace() {
    assert_eq!(
        normalize("cas://QmYwAPJzv5CZsnA/readme.txt"),
        "/cas/QmYwAPJzv5CZsnA/readme.txt"
    );
}

#[test]
fn test_normalize_keeps_existing_namespace() {
    assert_eq!(normalize("/cas/Qmabc/a"), "/cas/Qmabc/a");
    assert_eq!(normalize("/cas"), "/cas");
}

#[test]
fn test_normalize_adds_leading_slash() {
    assert_eq!(normalize("Qmabc"), "/cas/Qmabc");
}

#[test]
fn test_normalize_prefixes_bare_paths() {
    assert_eq!(normalize("/Qmabc/photo.png"), "/cas/Qmabc/photo.png");
}

#[test]
fn test_normalize_preserves_hash_case() {
    assert_eq!(normalize("cas://QmAbCdEf"), "/cas/QmAbCdEf");
}

#[test]
fn test_normalize_is_total_on_junk() {
    // Malformed input still yields a namespaced path; the backend rejects it.
    assert_eq!(normalize(""), "/cas/");
    assert_eq!(normalize("cas://"), "/cas/");
}

#[test]
fn test_lookalike_prefix_is_not_the_namespace() {
    // "/castle" shares bytes with the namespace but is a different segment.
    assert_eq!(normalize("/castle"), "/cas/castle");
    assert_eq!(to_display("/castle"), "/castle");
}

#[test]
fn test_join_handles_trailing_slash() {
    assert_eq!(join("/cas/Qmdir", "index.html"), "/cas/Qmdir/index.html");
    assert_eq!(join("/cas/Qmdir/", "index.html"), "/cas/Qmdir/index.html");
}

#[test]
fn test_display_swaps_namespace_for_scheme() {
    assert_eq!(to_display("/cas/Qmabc/docs"), "cas://Qmabc/docs");
    // Paths outside the namespace are shown as-is.
    assert_eq!(to_display("/other"), "/other");
}
