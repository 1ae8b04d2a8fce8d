use crate::normalization::RejectReason;
use crate::target::types::SchemeAndAuthority;
use std::net::Ipv6Addr;

/// Returns the byte offset where the authority of an absolute URI begins, or
/// `None` when `raw` is not of the form `scheme://...`.
pub fn find_authority(raw: &str) -> Option<usize> {
    let colon = raw.find(':').filter(|&i| i > 0)?;
    if raw.len() <= colon + 3 {
        return None;
    }
    let slash = raw.find('/').filter(|&i| i > 0)?;
    if slash < colon {
        return None;
    }
    raw[colon + 1..].starts_with("//").then_some(colon + 3)
}

/// Whether `maybe_uri` is an absolute URI with a non-empty scheme and
/// something after `://`.
pub fn is_absolute_uri(maybe_uri: Option<&str>) -> bool {
    maybe_uri.and_then(find_authority).is_some()
}

/// Validates `scheme` against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
/// and returns it lowercased.
pub fn validate_scheme(scheme: &str) -> Option<String> {
    let mut bytes = scheme.bytes();
    if !bytes.next()?.is_ascii_alphabetic() {
        return None;
    }
    if !bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')) {
        return None;
    }
    Some(scheme.to_ascii_lowercase())
}

/// The default port of a scheme. Serialization-prefixed schemes such as
/// `none+http` or `thrift+https` resolve through the part after the last `+`.
pub fn default_port(scheme: &str) -> Option<u16> {
    let protocol = scheme.rsplit('+').next().unwrap_or(scheme);
    match protocol {
        "http" | "h1c" | "h2c" | "ws" => Some(80),
        "https" | "h1" | "h2" | "wss" => Some(443),
        _ => None,
    }
}

/// Strips user-info from an authority: `user@host:port` becomes `host:port`.
pub(crate) fn strip_userinfo(authority: &str) -> &str {
    match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    }
}

pub(crate) fn parse_scheme_and_authority(
    scheme: &str,
    authority: &str,
) -> Result<SchemeAndAuthority, RejectReason> {
    let scheme = validate_scheme(scheme).ok_or(RejectReason::InvalidScheme)?;

    let authority = strip_userinfo(authority);
    let (host, port) = split_host_port(authority)?;

    // Drop the port when it is the scheme's default so that `https://a/` and
    // `https://a:443/` compare equal.
    let port = port.filter(|&p| default_port(&scheme) != Some(p));
    let authority = match port {
        Some(p) => format!("{host}:{p}"),
        None => host.to_string(),
    };

    Ok(SchemeAndAuthority {
        scheme,
        authority,
        host: host.to_string(),
        port,
    })
}

fn split_host_port(authority: &str) -> Result<(&str, Option<u16>), RejectReason> {
    if authority.is_empty() {
        return Err(RejectReason::InvalidAuthority);
    }

    let (host, port) = if authority.starts_with('[') {
        let close = authority.find(']').ok_or(RejectReason::InvalidAuthority)?;
        let literal = &authority[1..close];
        if literal.parse::<Ipv6Addr>().is_err() {
            return Err(RejectReason::InvalidAuthority);
        }
        let rest = &authority[close + 1..];
        let port = match rest.strip_prefix(':') {
            Some(port) => Some(port),
            None if rest.is_empty() => None,
            None => return Err(RejectReason::InvalidAuthority),
        };
        (&authority[..=close], port)
    } else {
        match authority.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    if host.is_empty() || !host.bytes().all(is_host_byte) {
        return Err(RejectReason::InvalidAuthority);
    }

    let port = match port {
        None | Some("") => None,
        Some(p) if p.bytes().all(|b| b.is_ascii_digit()) => {
            Some(p.parse::<u16>().map_err(|_| RejectReason::InvalidAuthority)?)
        }
        Some(_) => return Err(RejectReason::InvalidAuthority),
    };

    Ok((host, port))
}

fn is_host_byte(b: u8) -> bool {
    b > 0x20
        && b != 0x7F
        && !matches!(
            b,
            b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'|' | b'}' | b'/' | b'?' | b'#' | b'@'
        )
}
