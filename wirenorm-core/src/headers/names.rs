//! Header name tables. Every name is lowercase; callers look up lowercased
//! names.

use ahash::RandomState;
use once_cell::sync::Lazy;
use std::collections::HashSet;

type NameSet = HashSet<&'static str, RandomState>;

fn name_set(names: &[&'static str]) -> NameSet {
    names.iter().copied().collect()
}

pub const COOKIE: &str = "cookie";
pub const CONNECTION: &str = "connection";
pub const CONTENT_LENGTH: &str = "content-length";
pub const HOST: &str = "host";
pub const TE: &str = "te";
pub const UPGRADE: &str = "upgrade";

pub const METHOD: &str = ":method";
pub const SCHEME: &str = ":scheme";
pub const AUTHORITY: &str = ":authority";
pub const PATH: &str = ":path";
pub const PROTOCOL: &str = ":protocol";
pub const STATUS: &str = ":status";

/// Fields that never cross from HTTP/1 into the canonical form or onto an
/// HTTP/2 connection. RFC 9113 §8.2.2 plus the legacy `x-http2-*` markers
/// some HTTP/1 bridges use to smuggle stream metadata.
static HTTP1_TO_HTTP2_DISALLOWED: Lazy<NameSet> = Lazy::new(|| {
    name_set(&[
        "connection",
        "keep-alive",
        "proxy-connection",
        "transfer-encoding",
        "upgrade",
        "x-http2-stream-id",
        "x-http2-scheme",
        "x-http2-path",
    ])
});

/// Fields that are not written onto an HTTP/1 connection.
static HTTP2_TO_HTTP1_DISALLOWED: Lazy<NameSet> = Lazy::new(|| {
    name_set(&[
        "transfer-encoding",
        "x-http2-stream-id",
        "x-http2-scheme",
        "x-http2-path",
    ])
});

/// RFC 9110 §6.5.1: fields needed to frame, route, authenticate or control
/// a message cannot be sent in trailers.
static TRAILER_DISALLOWED: Lazy<NameSet> = Lazy::new(|| {
    name_set(&[
        "transfer-encoding",
        "content-length",
        "cache-control",
        "expect",
        "host",
        "max-forwards",
        "pragma",
        "range",
        "te",
        "www-authenticate",
        "authorization",
        "proxy-authenticate",
        "proxy-authorization",
        "date",
        "location",
        "retry-after",
        "vary",
        "warning",
        "content-encoding",
        "content-type",
        "content-range",
        "trailer",
    ])
});

pub fn is_http1_to_http2_disallowed(name: &str) -> bool {
    HTTP1_TO_HTTP2_DISALLOWED.contains(name)
}

pub fn is_http2_to_http1_disallowed(name: &str) -> bool {
    HTTP2_TO_HTTP1_DISALLOWED.contains(name)
}

pub fn is_trailer_disallowed(name: &str) -> bool {
    TRAILER_DISALLOWED.contains(name)
}

pub fn is_pseudo_header(name: &str) -> bool {
    name.starts_with(':')
}

/// Methods whose requests never carry a body, so a missing `content-length`
/// says nothing about the body.
pub(crate) fn is_bodyless_method(method: &str) -> bool {
    matches!(method, "CONNECT" | "GET" | "HEAD" | "OPTIONS" | "TRACE")
}
