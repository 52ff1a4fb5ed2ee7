//! Path guard: textual traversal check for request URIs.

/// Returns true if the URI tries to climb out of the served root with `..`
/// segments.
///
/// This is a literal check on the URI text, not a filesystem
/// canonicalization: a URI whose final segment is `..`, or that contains
/// `/../` anywhere, is rejected. Percent-encoded dots and symlinks inside
/// the root are not caught.
pub fn has_traversal(uri: &str) -> bool {
    uri.ends_with("/..") || uri.contains("/../")
}
