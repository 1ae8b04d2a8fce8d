use crate::headers::block::HeaderBlock;
use crate::headers::connection::{ConnectionOptions, TRAILERS, te_allows_trailers};
use crate::headers::names::{self, TE};
use crate::headers::types::{HeadersBuilder, HttpVersion};
use http::HeaderValue;
use tracing::{debug, trace};

/// Translates a native header block into a canonical builder.
///
/// - Field names are lowercased.
/// - `Connection`, the fields it nominates and the other hop-by-hop fields
///   are dropped, except the two fields of a WebSocket upgrade.
/// - `TE` survives only as `te: trailers`.
/// - Every cookie-pair becomes its own `cookie` entry.
/// - Known pseudo-headers from an HTTP/2 block fill the pseudo-header slots;
///   pseudo-headers in an HTTP/1 block and unknown pseudo-headers are dropped.
/// - Fields whose name or value is illegal are dropped.
///
/// Translation never fails.
pub fn translate_inbound(block: &HeaderBlock, version: HttpVersion) -> HeadersBuilder {
    let connection = ConnectionOptions::from_block(block);
    let mut builder = HeadersBuilder::new();
    let mut te_values: Vec<&str> = Vec::new();

    for (name, value) in block.iter() {
        let name = name.to_ascii_lowercase();

        if names::is_pseudo_header(&name) {
            if version == HttpVersion::Http1 {
                debug!(name = %name, "dropping pseudo-header from HTTP/1 block");
                continue;
            }
            match builder.pseudo_mut().slot_mut(&name) {
                Some(slot) => *slot = Some(value.to_string()),
                None => debug!(name = %name, "dropping unknown pseudo-header"),
            }
            continue;
        }

        if connection.keeps_upgrade_field(&name) {
            builder.append_str(&name, value);
            continue;
        }

        if names::is_http1_to_http2_disallowed(&name) || connection.is_nominated(&name) {
            trace!(name = %name, "dropping hop-by-hop header");
            continue;
        }

        if name == TE {
            te_values.push(value);
            continue;
        }

        builder.append_str(&name, value);
    }

    if te_allows_trailers(te_values.iter().copied()) {
        builder.append(http::header::TE, HeaderValue::from_static(TRAILERS));
    } else if !te_values.is_empty() {
        trace!("dropping te header without trailers");
    }

    builder
}
