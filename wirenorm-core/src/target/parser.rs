use crate::normalization::RejectReason;
use crate::target::authority::{find_authority, parse_scheme_and_authority};
use crate::target::bytes::DecodedBytes;
use crate::target::matrix::remove_matrix_variables;
use crate::target::paths::concat_paths;
use crate::target::tables::{Component, decode_hex_nibble};
use crate::target::types::{RequestTarget, TargetOptions};

/// Parses a request-line target (or an HTTP/2 `:path`) received by a server.
///
/// Accepts origin-form (`/path?query`) and the asterisk form `*`. The result
/// has no fragment: `#` is an ordinary character and comes out as `%23`.
pub fn parse_for_server(
    raw: &str,
    allow_semicolon_in_path: bool,
) -> Result<RequestTarget, RejectReason> {
    parse_for_server_with(
        raw,
        &TargetOptions {
            allow_semicolon_in_path,
            ..TargetOptions::default()
        },
    )
}

pub fn parse_for_server_with(
    raw: &str,
    options: &TargetOptions,
) -> Result<RequestTarget, RejectReason> {
    if raw.is_empty() {
        return Err(RejectReason::EmptyPath);
    }

    let allow_semicolon = options.allow_semicolon_in_path;
    let (raw_path, raw_query) = match raw.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (raw, None),
    };

    let path = decode(raw_path, Component::ServerPath, allow_semicolon)?;
    let query = raw_query
        .map(|q| decode(q, Component::Query, true))
        .transpose()?;

    if path.is_relative_path() {
        if query.is_none() && path.is_single(b'*') {
            return Ok(RequestTarget::asterisk());
        }
        if path.is_empty() {
            return Err(RejectReason::EmptyPath);
        }
        if find_authority(raw).is_some() {
            return Err(RejectReason::AbsoluteFormNotAllowed);
        }
        return Err(RejectReason::RelativePath);
    }

    if path_contains_double_dots(&path, allow_semicolon) {
        return Err(RejectReason::PathTraversal);
    }
    if !options.allow_double_dots_in_query
        && query.as_ref().is_some_and(query_contains_double_dots)
    {
        return Err(RejectReason::PathTraversal);
    }

    let encoded_path = path.encode(Component::ServerPath);
    let canonical_path = if allow_semicolon {
        encoded_path.clone()
    } else {
        remove_matrix_variables(&encoded_path).ok_or(RejectReason::InvalidMatrixVariable)?
    };

    Ok(RequestTarget::origin(
        canonical_path,
        encoded_path,
        query.map(|q| q.encode(Component::Query)),
        None,
    ))
}

/// Parses a target supplied by client code.
///
/// Relative and empty paths are accepted (`/` is prepended), `#` starts a
/// fragment, and consecutive slashes are kept. An absolute URI ignores
/// `prefix`; otherwise a `Some` prefix must itself be an absolute path.
pub fn parse_for_client(raw: &str, prefix: Option<&str>) -> Result<RequestTarget, RejectReason> {
    if let Some(authority_pos) = find_authority(raw) {
        return parse_absolute_for_client(raw, authority_pos);
    }

    if raw == "*" {
        return Ok(RequestTarget::asterisk());
    }

    match prefix {
        None => parse_relative_for_client(raw),
        Some(p) if p.starts_with('/') => parse_relative_for_client(&concat_paths(Some(p), raw)),
        Some(_) => Err(RejectReason::InvalidPrefix),
    }
}

fn parse_absolute_for_client(raw: &str, authority_pos: usize) -> Result<RequestTarget, RejectReason> {
    let scheme = &raw[..authority_pos - 3];
    let rest = &raw[authority_pos..];
    let next = rest.find(['/', '?', '#']);
    let authority = match next {
        Some(i) => &rest[..i],
        None => rest,
    };
    if authority.is_empty() {
        return Err(RejectReason::InvalidAuthority);
    }

    let endpoint = parse_scheme_and_authority(scheme, authority)?;
    let components = match next {
        Some(i) => split_client_components(&rest[i..])?,
        None => ClientComponents::default(),
    };

    Ok(RequestTarget::absolute(
        endpoint,
        components.path,
        components.query,
        components.fragment,
    ))
}

fn parse_relative_for_client(raw: &str) -> Result<RequestTarget, RejectReason> {
    let components = split_client_components(raw)?;
    if components.asterisk {
        return Ok(RequestTarget::asterisk());
    }
    Ok(RequestTarget::origin(
        components.path.clone(),
        components.path,
        components.query,
        components.fragment,
    ))
}

struct ClientComponents {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    asterisk: bool,
}

impl Default for ClientComponents {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            fragment: None,
            asterisk: false,
        }
    }
}

fn split_client_components(raw: &str) -> Result<ClientComponents, RejectReason> {
    let query_pos = raw.find('?');
    let fragment_pos = raw.find('#');

    // A '?' after '#' belongs to the fragment.
    let query_pos = match (query_pos, fragment_pos) {
        (Some(q), Some(f)) if f < q => None,
        (q, _) => q,
    };

    let path_end = query_pos.or(fragment_pos).unwrap_or(raw.len());
    let path = decode(&raw[..path_end], Component::ClientPath, true)?;

    let query = match query_pos {
        Some(q) => {
            let end = fragment_pos.unwrap_or(raw.len());
            Some(decode(&raw[q + 1..end], Component::Query, true)?)
        }
        None => None,
    };
    let fragment = fragment_pos
        .map(|f| decode(&raw[f + 1..], Component::Fragment, true))
        .transpose()?;

    if query.is_none() && path.is_single(b'*') {
        return Ok(ClientComponents {
            asterisk: true,
            ..ClientComponents::default()
        });
    }

    let encoded_path = path.encode(Component::ClientPath);
    let path = if path.is_relative_path() {
        format!("/{encoded_path}")
    } else {
        encoded_path
    };

    Ok(ClientComponents {
        path,
        query: query.map(|q| q.encode(Component::Query)),
        fragment: fragment.map(|f| f.encode(Component::Fragment)),
        asterisk: false,
    })
}

/// Decodes percent-escapes and re-encodes the component canonically.
///
/// Escapes are decoded unless the decoded byte must stay escaped in this
/// component; everything the component does not allow verbatim is marked for
/// re-encoding. Non-ASCII characters are always encoded as UTF-8.
fn decode(
    value: &str,
    component: Component,
    allow_semicolon: bool,
) -> Result<DecodedBytes, RejectReason> {
    let bytes = value.as_bytes();
    let mut buf = DecodedBytes::with_capacity(bytes.len());
    let mut was_slash = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'%' {
            let (Some(&hi), Some(&lo)) = (bytes.get(i + 1), bytes.get(i + 2)) else {
                return Err(RejectReason::InvalidPercentEncoding);
            };
            let (Some(hi), Some(lo)) = (decode_hex_nibble(hi), decode_hex_nibble(lo)) else {
                return Err(RejectReason::InvalidPercentEncoding);
            };
            let decoded = (hi << 4) | lo;

            if component.must_preserve_encoding(decoded) || (!allow_semicolon && decoded == b';') {
                buf.push_encoded(decoded);
                was_slash = false;
            } else {
                append_one_byte(&mut buf, decoded, was_slash, component)?;
                was_slash = decoded == b'/';
            }
            i += 3;
            continue;
        }

        if b == b'+' && component == Component::Query {
            buf.push_encoded(b' ');
            was_slash = false;
        } else if b.is_ascii() {
            append_one_byte(&mut buf, b, was_slash, component)?;
            was_slash = b == b'/';
        } else {
            // Part of a multi-byte UTF-8 sequence; `value` is a `str`, so the
            // sequence is well-formed.
            buf.push_encoded(b);
            was_slash = false;
        }
        i += 1;
    }

    Ok(buf)
}

fn append_one_byte(
    buf: &mut DecodedBytes,
    b: u8,
    was_slash: bool,
    component: Component,
) -> Result<(), RejectReason> {
    if b == 0x7F {
        return Err(RejectReason::ControlCharacter);
    }
    if b < 0x20 {
        // TAB, LF and CR are legal in a form-encoded query only.
        let form_whitespace = matches!(b, b'\t' | b'\n' | b'\r');
        if component != Component::Query || !form_whitespace {
            return Err(RejectReason::ControlCharacter);
        }
    }

    if b == b'/' && component == Component::ServerPath {
        if !was_slash {
            buf.push(b'/');
        }
    } else if component.is_allowed(b) {
        buf.push(b);
    } else {
        buf.push_encoded(b);
    }
    Ok(())
}

fn is_slash(b: u8) -> bool {
    matches!(b, b'/' | b'\\')
}

/// Flags `/../`, `/..` at the end, and `/..;` when semicolons are not allowed.
/// Escaped and unescaped bytes are treated alike, so `.%2e` and `%2F..` are
/// caught as well; a backslash counts as a slash.
fn path_contains_double_dots(path: &DecodedBytes, allow_semicolon: bool) -> bool {
    let data = path.as_slice();
    let (mut b0, mut b1, mut b2) = (0u8, 0u8, b'/');

    for &b3 in data.iter().skip(1) {
        if b1 == b'.'
            && b2 == b'.'
            && is_slash(b0)
            && (is_slash(b3) || (!allow_semicolon && b3 == b';'))
        {
            return true;
        }
        (b0, b1, b2) = (b1, b2, b3);
    }

    b1 == b'.' && b2 == b'.' && is_slash(b0)
}

/// Flags a `..` name or value in a query. `&` and `;` delimit pairs and only
/// the first `=` of a pair delimits, so `a=..` is flagged but `a=..=` is not.
fn query_contains_double_dots(query: &DecodedBytes) -> bool {
    let mut looking_for_equals = true;
    let (mut b0, mut b1, mut b2) = (0u8, 0u8, b'/');

    for &b in query.as_slice() {
        let b3 = match b {
            b'=' if looking_for_equals => {
                looking_for_equals = false;
                b'/'
            }
            b'&' | b';' => {
                looking_for_equals = true;
                b'/'
            }
            other => other,
        };

        if b1 == b'.' && b2 == b'.' && is_slash(b0) && is_slash(b3) {
            return true;
        }
        (b0, b1, b2) = (b1, b2, b3);
    }

    b1 == b'.' && b2 == b'.' && is_slash(b0)
}
