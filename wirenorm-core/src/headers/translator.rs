use crate::headers::block::HeaderBlock;
use crate::headers::inbound::translate_inbound;
use crate::headers::outbound::{Http1HeaderNaming, translate_outbound};
use crate::headers::types::{CanonicalHeaders, Direction, Headers, HttpVersion, classify_for};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderOptions {
    pub http1_header_naming: Http1HeaderNaming,
}

/// Converts header blocks between their native wire shapes and the canonical
/// form. Stateless apart from its options; one value can serve every
/// connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTranslator {
    options: HeaderOptions,
}

impl HeaderTranslator {
    pub fn new(options: HeaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HeaderOptions {
        &self.options
    }

    /// Reads a native block. `is_request` is the direction of the stream the
    /// block arrived on; `end_of_stream` is carried verbatim, independent of
    /// whether the block is empty.
    pub fn to_canonical(
        &self,
        block: &HeaderBlock,
        version: HttpVersion,
        is_request: bool,
        end_of_stream: bool,
    ) -> CanonicalHeaders {
        let mut builder = translate_inbound(block, version);
        builder
            .end_of_stream(end_of_stream)
            .mark_content_length(is_request);
        classify_for(builder.build(), is_request)
    }

    pub fn to_wire(&self, headers: &Headers, version: HttpVersion, direction: Direction) -> HeaderBlock {
        translate_outbound(headers, version, direction, self.options.http1_header_naming)
    }
}
