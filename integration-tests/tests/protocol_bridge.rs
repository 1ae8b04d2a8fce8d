mod common;

use pretty_assertions::assert_eq;
use wirenorm_core::headers::{
    CanonicalHeaders, Direction, HeaderBlock, HeaderOptions, HeaderTranslator, Http1HeaderNaming,
    HttpVersion,
};

fn block(fields: &[(&str, &str)]) -> HeaderBlock {
    fields.iter().copied().collect()
}

fn entries(block: &HeaderBlock) -> Vec<(&str, &str)> {
    block.iter().collect()
}

/// An HTTP/2 request forwarded to an HTTP/1 origin
#[test]
fn http2_request_to_http1_origin() {
    // Arrange
    let translator = HeaderTranslator::default();
    let inbound = block(&[
        (":method", "GET"),
        (":scheme", "https"),
        (":authority", "shop.example"),
        (":path", "/cart"),
        ("cookie", "session=1"),
        ("accept", "text/html"),
        ("cookie", "theme=dark"),
        ("te", "trailers"),
    ]);

    // Act
    let canonical = translator.to_canonical(&inbound, HttpVersion::Http2, true, true);
    let outbound = translator.to_wire(canonical.headers(), HttpVersion::Http1, Direction::Request);

    // Assert
    assert!(matches!(canonical, CanonicalHeaders::Request(_)));
    assert_eq!(
        entries(&outbound),
        [
            ("host", "shop.example"),
            ("accept", "text/html"),
            ("te", "trailers"),
            ("cookie", "session=1; theme=dark"),
        ]
    );
}

/// An HTTP/1 request forwarded to an HTTP/2 origin
#[test]
fn http1_request_to_http2_origin() {
    // Arrange
    let translator = HeaderTranslator::default();
    let inbound = block(&[
        ("Host", "shop.example"),
        ("Connection", "keep-alive, Upgrade"),
        ("Upgrade", "h2c"),
        ("Keep-Alive", "timeout=5"),
        ("Cookie", "session=1; theme=dark"),
        ("TE", "gzip, trailers"),
        ("User-Agent", "curl/8"),
    ]);

    // Act
    let canonical = translator.to_canonical(&inbound, HttpVersion::Http1, true, true);
    let mut builder = canonical.headers().to_builder();
    builder.method("GET").scheme("http").authority("shop.example").path("/cart");
    let outbound = translator.to_wire(&builder.build(), HttpVersion::Http2, Direction::Request);

    // Assert
    assert_eq!(
        entries(&outbound),
        [
            (":method", "GET"),
            (":scheme", "http"),
            (":authority", "shop.example"),
            (":path", "/cart"),
            ("host", "shop.example"),
            ("user-agent", "curl/8"),
            ("te", "trailers"),
            ("cookie", "session=1"),
            ("cookie", "theme=dark"),
        ]
    );
}

/// A response relayed to an HTTP/2 client, followed by HTTP/1 trailers
#[test]
fn response_and_trailers_to_http2_client() {
    // Arrange
    let translator = HeaderTranslator::default();
    let mut response_block = block(&[
        ("Content-Type", "application/grpc"),
        ("Transfer-Encoding", "chunked"),
        ("Trailer", "grpc-status"),
    ]);
    response_block.push(":status", "200");
    let trailer_block = block(&[("grpc-status", "0"), ("content-type", "text/plain")]);

    // Act
    let response = translator.to_canonical(&response_block, HttpVersion::Http2, false, false);
    let trailers = translator.to_canonical(&trailer_block, HttpVersion::Http1, false, true);
    let response_out = translator.to_wire(response.headers(), HttpVersion::Http2, Direction::Response);
    let trailers_out = translator.to_wire(trailers.headers(), HttpVersion::Http2, Direction::Trailers);

    // Assert
    assert_eq!(response.kind(), "response");
    assert_eq!(trailers.kind(), "other");
    assert!(trailers.headers().is_end_of_stream());
    assert_eq!(
        entries(&response_out),
        [
            (":status", "200"),
            ("content-type", "application/grpc"),
            ("trailer", "grpc-status"),
        ]
    );
    assert_eq!(entries(&trailers_out), [("grpc-status", "0")]);
}

/// WebSocket handshakes keep the fields needed to finish the upgrade
#[test]
fn websocket_handshake_survives() {
    let translator = HeaderTranslator::default();
    let inbound = block(&[
        ("Host", "chat.example"),
        ("Connection", "Upgrade"),
        ("Upgrade", "websocket"),
        ("Sec-WebSocket-Version", "13"),
    ]);

    let canonical = translator.to_canonical(&inbound, HttpVersion::Http1, true, true);
    let outbound = translator.to_wire(canonical.headers(), HttpVersion::Http1, Direction::Request);

    assert_eq!(
        entries(&outbound),
        [
            ("host", "chat.example"),
            ("connection", "Upgrade"),
            ("upgrade", "websocket"),
            ("sec-websocket-version", "13"),
        ]
    );
}

/// Configured traditional naming applies to HTTP/1 output only
#[test]
fn configured_header_naming() {
    // Arrange
    let config = common::config("headers {\n  http1_header_naming = \"traditional\"\n}\n");
    let translator = HeaderTranslator::new(config.headers);
    let inbound = block(&[(":status", "404"), ("content-type", "text/plain"), ("x-request-id", "7")]);

    // Act
    let canonical = translator.to_canonical(&inbound, HttpVersion::Http2, false, false);
    let http1 = translator.to_wire(canonical.headers(), HttpVersion::Http1, Direction::Response);
    let http2 = translator.to_wire(canonical.headers(), HttpVersion::Http2, Direction::Response);

    // Assert
    assert_eq!(
        translator.options(),
        &HeaderOptions {
            http1_header_naming: Http1HeaderNaming::Traditional
        }
    );
    assert_eq!(
        entries(&http1),
        [("Content-Type", "text/plain"), ("X-Request-Id", "7")]
    );
    assert_eq!(
        entries(&http2),
        [(":status", "404"), ("content-type", "text/plain"), ("x-request-id", "7")]
    );
}
