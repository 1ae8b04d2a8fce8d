use super::test_helpers::{assert_accept, assert_reject, assert_rewrite, http1, http2};
use crate::conf::{NormalizationConfig, load_config_str};
use crate::normalization::{
    NormalizationOutcome, RawRequestHead, RejectReason, RewriteReason, normalize_request,
};
use http::Method;
use pretty_assertions::assert_eq;

//-----------------------------------------------------------------------------
// Outcomes
//-----------------------------------------------------------------------------
#[test]
fn accept_canonical_request() {
    // Arrange
    let head = http1("/index.html?a=b", &[("Host", "example.com"), ("Accept", "*/*")]);

    // Act
    let request = assert_accept(&head);

    // Assert
    assert_eq!(request.method(), &Method::GET);
    assert_eq!(request.target().path(), "/index.html");
    assert_eq!(request.target().query(), Some("a=b"));
    let headers = request.headers();
    assert_eq!(headers.method(), "GET");
    assert_eq!(headers.path(), "/index.html?a=b");
    assert_eq!(headers.authority(), Some("example.com"));
    assert_eq!(headers.headers().get("host"), Some("example.com"));
    assert_eq!(headers.headers().get("accept"), Some("*/*"));
}

#[test]
fn accept_asterisk_form() {
    let mut head = http1("*", &[("host", "a")]);
    head.method = "OPTIONS".to_string();

    let request = assert_accept(&head);

    assert_eq!(request.headers().path(), "*");
}

#[test]
fn rewrite_path() {
    let request = assert_rewrite(&http1("/a%7Eb?q=1", &[]), RewriteReason::PathCanonicalization);

    assert_eq!(request.headers().path(), "/a~b?q=1");
}

#[test]
fn rewrite_query() {
    let request = assert_rewrite(&http1("/search?q=%41", &[]), RewriteReason::QueryCanonicalization);

    assert_eq!(request.headers().path(), "/search?q=A");
}

#[test]
fn path_reason_wins_over_query_reason() {
    assert_rewrite(&http1("/%7E?%41", &[]), RewriteReason::PathCanonicalization);
}

#[test]
fn rewrite_stripped_matrix_variables() {
    let request = assert_rewrite(&http1("/users;v=1/list", &[]), RewriteReason::PathCanonicalization);

    assert_eq!(request.target().path(), "/users/list");
    assert_eq!(request.target().path_with_matrix_variables(), "/users;v=1/list");
}

#[test]
fn config_keeps_semicolons() {
    // Arrange
    let config = load_config_str("target {\n  allow_semicolon_in_path = true\n}\n").unwrap();
    let head = http1("/users;v=1/list", &[]);

    // Act
    let outcome = normalize_request(&head, &config);

    // Assert
    let NormalizationOutcome::Accept(request) = outcome else {
        panic!("expected accept, got {outcome:?}");
    };
    assert_eq!(request.target().path(), "/users;v=1/list");
}

//-----------------------------------------------------------------------------
// Rejections
//-----------------------------------------------------------------------------
#[test]
fn reject_bad_targets() {
    assert_reject(&http1("", &[]), RejectReason::EmptyPath);
    assert_reject(&http1("foo", &[]), RejectReason::RelativePath);
    assert_reject(&http1("/../etc/passwd", &[]), RejectReason::PathTraversal);
    assert_reject(&http1("/%zz", &[]), RejectReason::InvalidPercentEncoding);
    assert_reject(&http1("/a\u{0}", &[]), RejectReason::ControlCharacter);
    assert_reject(&http1("http://a/b", &[]), RejectReason::AbsoluteFormNotAllowed);
}

#[test]
fn reject_invalid_method() {
    let mut head = http1("/", &[]);
    head.method = "GE T".to_string();

    assert_reject(&head, RejectReason::InvalidMethod);
}

#[test]
fn reject_empty_authority() {
    assert_reject(&http1("/", &[("host", "user@")]), RejectReason::InvalidAuthority);
}

//-----------------------------------------------------------------------------
// Headers
//-----------------------------------------------------------------------------
#[test]
fn strip_userinfo_from_host() {
    let request = assert_accept(&http1("/", &[("host", "user:pw@example.com:8080")]));

    assert_eq!(request.headers().authority(), Some("example.com:8080"));
}

#[test]
fn request_without_host_has_no_authority() {
    let request = assert_accept(&http1("/", &[]));

    assert_eq!(request.headers().authority(), None);
}

#[test]
fn strip_hop_by_hop_fields() {
    let request = assert_accept(&http1(
        "/",
        &[
            ("connection", "x-trace"),
            ("x-trace", "1"),
            ("transfer-encoding", "chunked"),
            ("x-kept", "1"),
        ],
    ));

    let fields = request.headers().headers();
    assert_eq!(fields.len(), 1);
    assert!(fields.contains("x-kept"));
}

#[test]
fn carry_end_of_stream_and_content_length_state() {
    // Arrange
    let get = http1("/", &[]);
    let mut post = http1("/", &[]);
    post.method = "POST".to_string();
    post.end_of_stream = false;

    // Act
    let get = assert_accept(&get);
    let post = assert_accept(&post);

    // Assert
    assert!(get.headers().headers().is_end_of_stream());
    assert!(!get.headers().headers().is_content_length_unknown());
    assert!(!post.headers().headers().is_end_of_stream());
    assert!(post.headers().headers().is_content_length_unknown());
}

//-----------------------------------------------------------------------------
// HTTP/2
//-----------------------------------------------------------------------------
#[test]
fn lift_method_and_path_from_http2_block() {
    // Arrange
    let head = http2(&[
        (":method", "PUT"),
        (":scheme", "https"),
        (":authority", "example.com"),
        (":path", "/upload"),
        ("content-length", "4"),
    ]);

    // Act
    let request = assert_accept(&head);

    // Assert
    assert_eq!(request.method(), &Method::PUT);
    let headers = request.headers();
    assert_eq!(headers.scheme(), Some("https"));
    assert_eq!(headers.authority(), Some("example.com"));
    assert_eq!(headers.path(), "/upload");
    assert!(!headers.headers().is_content_length_unknown());
}

#[test]
fn http2_falls_back_to_host_field() {
    let head = http2(&[(":method", "GET"), (":path", "/"), ("host", "fallback.example")]);

    let request = assert_accept(&head);

    assert_eq!(request.headers().authority(), Some("fallback.example"));
}

#[test]
fn http2_without_path_is_empty() {
    assert_reject(&http2(&[(":method", "GET")]), RejectReason::EmptyPath);
}

#[test]
fn http2_without_method_is_invalid() {
    assert_reject(&http2(&[(":path", "/")]), RejectReason::InvalidMethod);
}

#[test]
fn http2_head_records_version() {
    let head = RawRequestHead::from_http2([(":method", "GET"), (":path", "/x")].into_iter().collect(), true);

    assert_eq!(head.method, "GET");
    assert_eq!(head.target, "/x");
    assert!(head.end_of_stream);
    assert!(!normalize_request(&head, &NormalizationConfig::default()).is_reject());
}
