use crate::headers::{
    CanonicalHeaders, Direction, HeaderBlock, HeaderTranslator, Headers, HttpVersion,
};

pub(crate) fn block(input: &[(&str, &str)]) -> HeaderBlock {
    input.iter().copied().collect()
}

pub(crate) fn entries(block: &HeaderBlock) -> Vec<(&str, &str)> {
    block.iter().collect()
}

pub(crate) fn canonical(input: &[(&str, &str)], version: HttpVersion, is_request: bool) -> CanonicalHeaders {
    HeaderTranslator::default().to_canonical(&block(input), version, is_request, false)
}

/// Canonical fields of an inbound request block, in storage order.
pub(crate) fn canonical_fields(input: &[(&str, &str)], version: HttpVersion) -> Vec<(String, String)> {
    let headers = canonical(input, version, true).into_headers();
    fields(&headers)
}

pub(crate) fn fields(headers: &Headers) -> Vec<(String, String)> {
    headers
        .fields()
        .map(|(k, v)| (k.as_str().to_string(), v.to_string()))
        .collect()
}

pub(crate) fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn wire(headers: &Headers, version: HttpVersion, direction: Direction) -> HeaderBlock {
    HeaderTranslator::default().to_wire(headers, version, direction)
}
