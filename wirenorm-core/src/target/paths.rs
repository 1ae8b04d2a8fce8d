use crate::target::tables::decode_hex_nibble;
use std::borrow::Cow;

/// Concatenates a path prefix and a path into an absolute path.
///
/// A missing or empty prefix is the root. The join never produces a double
/// slash, and a path starting with `?` is appended verbatim.
pub fn concat_paths(prefix: Option<&str>, path: &str) -> String {
    let prefix = match prefix {
        None | Some("") | Some("/") => {
            return if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            };
        }
        Some(prefix) => prefix,
    };

    if path.is_empty() {
        return prefix.to_string();
    }

    match (prefix.ends_with('/'), path.as_bytes()[0]) {
        (true, b'/') => format!("{prefix}{}", &path[1..]),
        (true, _) | (false, b'/') | (false, b'?') => format!("{prefix}{path}"),
        (false, _) => format!("{prefix}/{path}"),
    }
}

/// Decodes a percent-encoded path for display or routing.
///
/// `%2F` is left encoded (with its original case) so that an escaped slash
/// stays distinguishable from a segment separator. Malformed escapes and
/// non-ASCII input characters decode to U+FFFD. A path without `%` is returned
/// borrowed.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    if !path.contains('%') {
        return Cow::Borrowed(path);
    }
    Cow::Owned(slow_decode(path, false))
}

/// Decodes a single path parameter. Unlike [`decode_path`], `%2F` becomes `/`.
pub fn decode_path_param(param: &str) -> Cow<'_, str> {
    if !param.contains('%') {
        return Cow::Borrowed(param);
    }
    Cow::Owned(slow_decode(param, true))
}

// 0xFF never appears in valid UTF-8, so every invalid input position turns
// into exactly one replacement character.
const INVALID: u8 = 0xFF;

fn slow_decode(path: &str, decode_slash: bool) -> String {
    let mut buf = Vec::with_capacity(path.len());
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            buf.push(if c.is_ascii() { c as u8 } else { INVALID });
            continue;
        }

        let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
            // '%' or '%x' at the end of input
            buf.push(INVALID);
            break;
        };

        let nibbles = ascii_nibble(hi).zip(ascii_nibble(lo));
        match nibbles {
            Some((h, l)) => {
                let decoded = (h << 4) | l;
                if decoded == b'/' && !decode_slash {
                    buf.extend_from_slice(b"%2");
                    buf.push(lo as u8);
                } else {
                    buf.push(decoded);
                }
            }
            None => buf.push(INVALID),
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

fn ascii_nibble(c: char) -> Option<u8> {
    if c.is_ascii() {
        decode_hex_nibble(c as u8)
    } else {
        None
    }
}
