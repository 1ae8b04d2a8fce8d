use crate::conf::NormalizationConfig;
use crate::headers::{
    CanonicalHeaders, HeaderBlock, HttpVersion, add_http2_authority, classify_for, names,
    translate_inbound,
};
use crate::normalization::{NormalizationOutcome, NormalizedRequest, RejectReason, RewriteReason};
use crate::target::{RequestTarget, parse_for_server_with};
use http::Method;
use tracing::debug;

/// A request head as read off the wire, before any normalization.
#[derive(Debug, Clone)]
pub struct RawRequestHead {
    pub method: String,
    pub target: String,
    pub version: HttpVersion,
    pub headers: HeaderBlock,
    pub end_of_stream: bool,
}

impl RawRequestHead {
    /// An HTTP/1 request line plus its header fields.
    pub fn http1(
        method: impl Into<String>,
        target: impl Into<String>,
        headers: HeaderBlock,
        end_of_stream: bool,
    ) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
            version: HttpVersion::Http1,
            headers,
            end_of_stream,
        }
    }

    /// An HTTP/2 HEADERS block; `:method` and `:path` are lifted out of it.
    pub fn from_http2(headers: HeaderBlock, end_of_stream: bool) -> Self {
        let method = headers.get(names::METHOD).unwrap_or_default().to_string();
        let target = headers.get(names::PATH).unwrap_or_default().to_string();
        Self {
            method,
            target,
            version: HttpVersion::Http2,
            headers,
            end_of_stream,
        }
    }
}

/// Normalize a raw request head into canonical request headers and target.
///
/// The outcome is `Accept` when the canonical target is byte-identical to the
/// raw one and `Rewrite` otherwise. A rejection never carries a partial result.
pub fn normalize_request(
    head: &RawRequestHead,
    config: &NormalizationConfig,
) -> NormalizationOutcome<NormalizedRequest> {
    let Ok(method) = Method::from_bytes(head.method.as_bytes()) else {
        return reject(head, RejectReason::InvalidMethod);
    };

    let target = match parse_for_server_with(&head.target, &config.target) {
        Ok(target) => target,
        Err(reason) => return reject(head, reason),
    };

    let mut builder = translate_inbound(&head.headers, head.version);

    // HTTP/2 prefers `:authority`; `host` is the fallback for both versions.
    let authority = builder
        .pseudo_mut()
        .authority
        .take()
        .or_else(|| builder.get(names::HOST).map(str::to_string));
    if let Err(err) = add_http2_authority(authority.as_deref(), &mut builder) {
        debug!(error = %err, "rejecting request authority");
        return reject(head, RejectReason::InvalidAuthority);
    }

    let path = target.path_and_query();
    builder
        .method(method.as_str())
        .path(path.as_str())
        .end_of_stream(head.end_of_stream)
        .mark_content_length(true);

    let CanonicalHeaders::Request(headers) = classify_for(builder.build(), true) else {
        return reject(head, RejectReason::EmptyPath);
    };

    let rewrite = rewrite_reason(&head.target, &target, &path);
    let request = NormalizedRequest::new(method, target, headers);
    match rewrite {
        None => NormalizationOutcome::Accept(request),
        Some(reason) => NormalizationOutcome::Rewrite {
            value: request,
            reason,
        },
    }
}

/// `None` when the canonical `:path` equals the raw target. A changed path
/// wins over a changed query.
fn rewrite_reason(raw: &str, target: &RequestTarget, canonical: &str) -> Option<RewriteReason> {
    if raw == canonical {
        return None;
    }
    let raw_path = raw.split_once('?').map_or(raw, |(path, _)| path);
    if raw_path != target.path() {
        Some(RewriteReason::PathCanonicalization)
    } else {
        Some(RewriteReason::QueryCanonicalization)
    }
}

fn reject<T>(head: &RawRequestHead, reason: RejectReason) -> NormalizationOutcome<T> {
    debug!(
        reason = %reason,
        request_target = %head.target,
        method = %head.method,
        "rejecting request head"
    );
    NormalizationOutcome::reject(reason)
}
