use crate::normalization::RejectReason;
use crate::target::{RequestTarget, parse_for_client, parse_for_server};

pub(crate) fn server(raw: &str) -> Result<RequestTarget, RejectReason> {
    parse_for_server(raw, false)
}

pub(crate) fn client(raw: &str) -> Result<RequestTarget, RejectReason> {
    parse_for_client(raw, None)
}

pub(crate) fn assert_accepted(
    outcome: Result<RequestTarget, RejectReason>,
    expected_path: &str,
    expected_query: Option<&str>,
    expected_fragment: Option<&str>,
) -> RequestTarget {
    match outcome {
        Ok(target) => {
            assert_eq!(target.path(), expected_path, "path of {target}");
            assert_eq!(target.query(), expected_query, "query of {target}");
            assert_eq!(target.fragment(), expected_fragment, "fragment of {target}");
            target
        }
        Err(reason) => panic!("Expected a target, got {reason:?}"),
    }
}

pub(crate) fn assert_rejected(outcome: Result<RequestTarget, RejectReason>, reason: RejectReason) {
    match outcome {
        Err(r) => assert_eq!(r, reason),
        Ok(target) => panic!("Expected {reason:?}, got {target}"),
    }
}

/// Traversal patterns that must be rejected wherever they appear.
#[rustfmt::skip]
pub(crate) const BAD_DOUBLE_DOT_PATTERNS: &[&str] = &[
    "..", "/..", "../", "/../",
    "../foo", "/../foo",
    "foo/..", "/foo/..",
    "foo/../", "/foo/../",
    "foo/../bar", "/foo/../bar",
    // escaped dots
    ".%2e", "/.%2e", "%2E./", "/%2E./", ".%2E/", "/.%2E/",
    "foo/.%2e", "/foo/.%2e",
    "foo/%2E./", "/foo/%2E./",
    "foo/%2E./bar", "/foo/%2E./bar",
    // escaped slashes
    "%2f..", "..%2F", "/..%2F", "%2F../", "%2f..%2f",
    "/foo%2f..", "/foo%2f../", "/foo/..%2f", "/foo%2F..%2F",
    // escaped dots and slashes
    ".%2E%2F",
    // backslashes
    "\\..", "..\\", "/foo\\..\\bar",
    // matrix variables
    "..;a=b", "/..;a=b",
    "..;a=b/foo", "/..;a=b/foo",
    "foo/..;a=b", "/foo/..;a=b",
    "foo/..;a=b/", "/foo/..;a=b/",
    "foo/..;a=b/bar", "/foo/..;a=b/bar",
    ".%2e;a=b", "/.%2e;a=b", "%2E.;a=b/", "/%2E.;a=b/", ".%2E;a=b/", "/.%2E;a=b/",
    "foo/.%2e;a=b", "/foo/.%2e;a=b",
    "foo/%2E.;a=b/", "/foo/%2E.;a=b/",
    "foo/%2E.;a=b/bar", "/foo/%2E.;a=b/bar",
    "%2f..;a=b", "..;a=b%2F", "/..;a=b%2F", "%2F..;a=b/", "%2f..;a=b%2f",
    "/foo%2f..;a=b", "/foo%2f..;a=b/", "/foo/..;a=b%2f", "/foo%2F..;a=b%2F",
];

#[rustfmt::skip]
pub(crate) const GOOD_DOUBLE_DOT_PATTERNS: &[&str] = &[
    "..a", "a..", "a..b",
    "/..a", "/a..", "/a..b",
    "..a/", "a../", "a..b/",
    "/..a/", "/a../", "/a..b/",
];

pub(crate) fn to_absolute_path(pattern: &str) -> String {
    if pattern.starts_with('/') {
        pattern.to_string()
    } else {
        format!("/{pattern}")
    }
}
