use crate::headers::block::HeaderBlock;
use crate::headers::connection::{TRAILERS, te_allows_trailers};
use crate::headers::cookie::join_cookies;
use crate::headers::names::{self, COOKIE, HOST, TE};
use crate::headers::types::{Direction, Headers, HttpVersion};
use serde::{Deserialize, Serialize};

/// Case of field names written to an HTTP/1 connection. HTTP/2 names are
/// always lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Http1HeaderNaming {
    #[default]
    Lowercase,
    /// `Content-Type`, `X-Forwarded-For`
    Traditional,
}

impl Http1HeaderNaming {
    fn apply(self, name: &str) -> String {
        match self {
            Http1HeaderNaming::Lowercase => name.to_string(),
            Http1HeaderNaming::Traditional => traditional_case(name),
        }
    }
}

fn traditional_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        upper = c == '-';
    }
    out
}

/// Writes canonical headers as a native block for `version`.
pub fn translate_outbound(
    headers: &Headers,
    version: HttpVersion,
    direction: Direction,
    naming: Http1HeaderNaming,
) -> HeaderBlock {
    match version {
        HttpVersion::Http1 => to_http1(headers, direction, naming),
        HttpVersion::Http2 => to_http2(headers, direction),
    }
}

/// - Request headers lead with `:method`, `:scheme`, `:authority`, `:path`
///   and `:protocol`; response headers with `:status`; trailers with none.
/// - Connection-specific fields are never written and `te` is reduced to
///   `trailers` (RFC 9113 §8.2.2).
/// - Each cookie-pair is its own `cookie` field (RFC 9113 §8.2.3).
fn to_http2(headers: &Headers, direction: Direction) -> HeaderBlock {
    let mut out = HeaderBlock::with_capacity(headers.len() + 5);
    let pseudo = headers.pseudo();

    match direction {
        Direction::Request => {
            for (name, value) in pseudo.request_entries() {
                out.push(name, value);
            }
        }
        Direction::Response => {
            if let Some(status) = &pseudo.status {
                out.push(names::STATUS, status.as_str());
            }
        }
        Direction::Trailers => {}
    }

    let mut te_written = false;
    for (name, value) in regular_fields(headers, direction) {
        if names::is_http1_to_http2_disallowed(name) {
            continue;
        }
        if name == TE {
            if !te_written && te_allows_trailers([value]) {
                out.push(TE, TRAILERS);
                te_written = true;
            }
            continue;
        }
        out.push(name, value);
    }

    for cookie in headers.cookies() {
        out.push(COOKIE, cookie);
    }

    out
}

/// - No pseudo-headers; a request's `:authority` becomes `host` unless a
///   `host` field exists.
/// - All cookie-pairs are joined into one trailing `cookie` field
///   (RFC 6265 §5.4).
fn to_http1(headers: &Headers, direction: Direction, naming: Http1HeaderNaming) -> HeaderBlock {
    let mut out = HeaderBlock::with_capacity(headers.len() + 1);

    if direction == Direction::Request && !headers.contains(HOST) {
        if let Some(authority) = &headers.pseudo().authority {
            out.push(naming.apply(HOST), authority.as_str());
        }
    }

    for (name, value) in regular_fields(headers, direction) {
        if names::is_http2_to_http1_disallowed(name) {
            continue;
        }
        out.push(naming.apply(name), value);
    }

    let cookie = join_cookies(headers.cookies());
    if !cookie.is_empty() {
        out.push(naming.apply(COOKIE), cookie);
    }

    out
}

/// Regular fields minus cookies, which are written separately, and minus
/// anything a trailer section may not carry.
fn regular_fields(
    headers: &Headers,
    direction: Direction,
) -> impl Iterator<Item = (&str, &str)> {
    headers.fields().filter_map(move |(name, value)| {
        let name = name.as_str();
        if name == COOKIE {
            return None;
        }
        if direction == Direction::Trailers && names::is_trailer_disallowed(name) {
            return None;
        }
        Some((name, value))
    })
}
