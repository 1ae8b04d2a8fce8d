use crate::headers::names::{self, COOKIE, CONTENT_LENGTH};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpVersion {
    Http1,
    Http2,
}

/// Which section of a message an outbound header block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Request,
    Response,
    Trailers,
}

/// The HTTP/2 pseudo-headers recognized by the canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PseudoHeaders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PseudoHeaders {
    /// Slot for a lowercase pseudo-header name, `None` if it is not one we
    /// know.
    pub(crate) fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            names::METHOD => Some(&mut self.method),
            names::SCHEME => Some(&mut self.scheme),
            names::AUTHORITY => Some(&mut self.authority),
            names::PATH => Some(&mut self.path),
            names::PROTOCOL => Some(&mut self.protocol),
            names::STATUS => Some(&mut self.status),
            _ => None,
        }
    }

    /// Request pseudo-headers in the order HTTP/2 encoders conventionally emit
    /// them.
    pub(crate) fn request_entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (names::METHOD, &self.method),
            (names::SCHEME, &self.scheme),
            (names::AUTHORITY, &self.authority),
            (names::PATH, &self.path),
            (names::PROTOCOL, &self.protocol),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }

    fn clear_request(&mut self) {
        self.method = None;
        self.scheme = None;
        self.authority = None;
        self.path = None;
        self.protocol = None;
    }
}

/// Field value as text: UTF-8 when it decodes, otherwise one char per byte
/// (latin-1), so obs-text is never lost.
pub(crate) fn value_text(value: &HeaderValue) -> String {
    match std::str::from_utf8(value.as_bytes()) {
        Ok(text) => text.to_string(),
        Err(_) => value.as_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}

fn name_matches(field: &HeaderName, name: &str) -> bool {
    field.as_str().eq_ignore_ascii_case(name)
}

/// Regular fields in arrival order.
type Fields = Vec<(HeaderName, String)>;

/// Mutable, construction-only form of [`Headers`].
#[derive(Debug, Clone, Default)]
pub struct HeadersBuilder {
    pseudo: PseudoHeaders,
    fields: Fields,
    end_of_stream: bool,
    content_length_unknown: bool,
}

impl HeadersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pseudo(&self) -> &PseudoHeaders {
        &self.pseudo
    }

    pub fn pseudo_mut(&mut self) -> &mut PseudoHeaders {
        &mut self.pseudo
    }

    pub fn method(&mut self, method: impl Into<String>) -> &mut Self {
        self.pseudo.method = Some(method.into());
        self
    }

    pub fn scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.pseudo.scheme = Some(scheme.into());
        self
    }

    pub fn authority(&mut self, authority: impl Into<String>) -> &mut Self {
        self.pseudo.authority = Some(authority.into());
        self
    }

    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.pseudo.path = Some(path.into());
        self
    }

    pub fn status(&mut self, status: impl Into<String>) -> &mut Self {
        self.pseudo.status = Some(status.into());
        self
    }

    pub fn end_of_stream(&mut self, end_of_stream: bool) -> &mut Self {
        self.end_of_stream = end_of_stream;
        self
    }

    pub fn content_length_unknown(&mut self, unknown: bool) -> &mut Self {
        self.content_length_unknown = unknown;
        self
    }

    /// Appends a regular field. A `cookie` value is split so that every
    /// cookie-pair is stored as its own entry.
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
        if name.as_str() == COOKIE {
            self.append_cookie_value(&value);
        } else {
            self.fields.push((name, value_text(&value)));
        }
        self
    }

    /// Appends a field from raw strings. Returns `false` (and stores nothing)
    /// when `name` or `value` is not a legal field name or value.
    pub fn append_str(&mut self, name: &str, value: &str) -> bool {
        let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
            debug!(name, "dropping header with invalid name");
            return false;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            debug!(name = %name, "dropping header with invalid value");
            return false;
        };
        self.append(name, value);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| name_matches(n, name))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| name_matches(n, name))
            .map(|(_, v)| v.as_str())
    }

    /// Removes every entry of `name`, keeping the others in order. Returns
    /// the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let mut first = None;
        self.fields.retain_mut(|(n, v)| {
            if !name_matches(n, name) {
                return true;
            }
            if first.is_none() {
                first = Some(std::mem::take(v));
            }
            false
        });
        first
    }

    /// Sets `content_length_unknown` from the current fields and `:method`.
    pub(crate) fn mark_content_length(&mut self, is_request: bool) -> &mut Self {
        let bodyless = is_request
            && self
                .pseudo
                .method
                .as_deref()
                .is_some_and(names::is_bodyless_method);
        self.content_length_unknown = !self.contains(CONTENT_LENGTH) && !bodyless;
        self
    }

    pub fn build(self) -> Headers {
        Headers {
            pseudo: self.pseudo,
            fields: self.fields,
            end_of_stream: self.end_of_stream,
            content_length_unknown: self.content_length_unknown,
        }
    }

    fn append_cookie_value(&mut self, value: &HeaderValue) {
        let value = value_text(value);
        for pair in crate::headers::cookie::split_cookie(&value) {
            self.fields.push((http::header::COOKIE, pair.to_string()));
        }
    }
}

/// Canonical, immutable header collection.
///
/// Fields keep their arrival order, interleaved names included. Names are
/// lowercase (`http::HeaderName` guarantees this); the pseudo-headers are
/// kept apart from the fields; every cookie-pair is a separate `cookie`
/// entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    pseudo: PseudoHeaders,
    fields: Fields,
    end_of_stream: bool,
    content_length_unknown: bool,
}

impl Headers {
    pub fn builder() -> HeadersBuilder {
        HeadersBuilder::new()
    }

    pub fn pseudo(&self) -> &PseudoHeaders {
        &self.pseudo
    }

    /// Regular fields in arrival order.
    pub fn fields(&self) -> impl Iterator<Item = (&HeaderName, &str)> {
        self.fields.iter().map(|(n, v)| (n, v.as_str()))
    }

    /// The fields as an `http::HeaderMap`, which groups repeated names.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.fields.len());
        for (name, value) in &self.fields {
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    map.append(name.clone(), value);
                }
                Err(_) => debug!(name = %name, "skipping field with invalid value"),
            }
        }
        map
    }

    pub fn get<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        self.get_all(name).next()
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |(n, _)| name_matches(n, name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| name_matches(n, name))
    }

    /// The individual cookie-pairs, in arrival order.
    pub fn cookies(&self) -> impl Iterator<Item = &str> {
        self.get_all(COOKIE)
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }

    pub fn is_content_length_unknown(&self) -> bool {
        self.content_length_unknown
    }

    /// Number of regular fields, counting each cookie-pair.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_builder(&self) -> HeadersBuilder {
        HeadersBuilder {
            pseudo: self.pseudo.clone(),
            fields: self.fields.clone(),
            end_of_stream: self.end_of_stream,
            content_length_unknown: self.content_length_unknown,
        }
    }
}

/// Headers that opened a request: `:method` and `:path` are present and
/// `:status` is not.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestHeaders(Headers);

impl RequestHeaders {
    pub fn method(&self) -> &str {
        self.0.pseudo.method.as_deref().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.0.pseudo.path.as_deref().unwrap_or_default()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.0.pseudo.scheme.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.0.pseudo.authority.as_deref()
    }

    pub fn protocol(&self) -> Option<&str> {
        self.0.pseudo.protocol.as_deref()
    }

    pub fn headers(&self) -> &Headers {
        &self.0
    }

    pub fn into_inner(self) -> Headers {
        self.0
    }
}

/// Headers that opened a response: `:status` is present and no request
/// pseudo-header is.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHeaders(Headers);

impl ResponseHeaders {
    pub fn status(&self) -> &str {
        self.0.pseudo.status.as_deref().unwrap_or_default()
    }

    pub fn headers(&self) -> &Headers {
        &self.0
    }

    pub fn into_inner(self) -> Headers {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalHeaders {
    Request(RequestHeaders),
    Response(ResponseHeaders),
    /// Neither request nor response headers, e.g. trailers.
    Other(Headers),
}

impl CanonicalHeaders {
    pub fn headers(&self) -> &Headers {
        match self {
            CanonicalHeaders::Request(h) => h.headers(),
            CanonicalHeaders::Response(h) => h.headers(),
            CanonicalHeaders::Other(h) => h,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            CanonicalHeaders::Request(h) => h.into_inner(),
            CanonicalHeaders::Response(h) => h.into_inner(),
            CanonicalHeaders::Other(h) => h,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CanonicalHeaders::Request(_) => "request",
            CanonicalHeaders::Response(_) => "response",
            CanonicalHeaders::Other(_) => "other",
        }
    }
}

/// Classifies a header block that carries no request/response tag:
/// `:method` + `:path` make request headers (a stray `:status` is dropped),
/// otherwise `:status` makes response headers, otherwise neither.
pub fn classify(headers: Headers) -> CanonicalHeaders {
    if is_request_shaped(&headers) {
        into_request(headers)
    } else if headers.pseudo.status.is_some() {
        into_response(headers)
    } else {
        CanonicalHeaders::Other(headers)
    }
}

/// Classifies headers read from a stream whose direction is known.
pub fn classify_for(headers: Headers, is_request: bool) -> CanonicalHeaders {
    if is_request && is_request_shaped(&headers) {
        into_request(headers)
    } else if !is_request && headers.pseudo.status.is_some() {
        into_response(headers)
    } else {
        CanonicalHeaders::Other(headers)
    }
}

fn is_request_shaped(headers: &Headers) -> bool {
    headers.pseudo.method.is_some() && headers.pseudo.path.is_some()
}

fn into_request(mut headers: Headers) -> CanonicalHeaders {
    headers.pseudo.status = None;
    CanonicalHeaders::Request(RequestHeaders(headers))
}

fn into_response(mut headers: Headers) -> CanonicalHeaders {
    headers.pseudo.clear_request();
    CanonicalHeaders::Response(ResponseHeaders(headers))
}
