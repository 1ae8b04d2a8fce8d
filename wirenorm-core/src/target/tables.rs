//! Byte-class tables for request-target components.
//!
//! Each table covers the ASCII range only; bytes >= 0x80 are never allowed
//! verbatim and never preserved as an escape.

const ALLOWED_COMMON: &[u8] = b"-._~:/?@!$&'()*,;=";

pub(crate) static PATH_ALLOWED: [bool; 128] = allowed(b"+");
pub(crate) static QUERY_ALLOWED: [bool; 128] = allowed(b"[]");

/// Escapes that must stay escaped when decoding a path or fragment.
pub(crate) static PATH_MUST_PRESERVE: [bool; 128] = marked(b"/?");

/// Escapes that must stay escaped when decoding a query, so that a decoded
/// sub-delimiter can never change how the query splits into pairs.
pub(crate) static QUERY_MUST_PRESERVE: [bool; 128] = marked(b":/?[]@!$&'()*+,;=");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
    ServerPath,
    ClientPath,
    Query,
    Fragment,
}

impl Component {
    pub(crate) fn is_allowed(self, b: u8) -> bool {
        let table = match self {
            Component::ServerPath | Component::ClientPath | Component::Fragment => &PATH_ALLOWED,
            Component::Query => &QUERY_ALLOWED,
        };
        lookup(table, b)
    }

    pub(crate) fn must_preserve_encoding(self, b: u8) -> bool {
        let table = match self {
            Component::ServerPath | Component::ClientPath | Component::Fragment => {
                &PATH_MUST_PRESERVE
            }
            Component::Query => &QUERY_MUST_PRESERVE,
        };
        lookup(table, b)
    }
}

fn lookup(table: &[bool; 128], b: u8) -> bool {
    (b as usize) < table.len() && table[b as usize]
}

const fn allowed(extra: &[u8]) -> [bool; 128] {
    let mut table = [false; 128];
    let mut b = 0u8;
    while b < 128 {
        if b.is_ascii_alphanumeric() {
            table[b as usize] = true;
        }
        b += 1;
    }
    mark_all(&mut table, ALLOWED_COMMON);
    mark_all(&mut table, extra);
    table
}

const fn marked(chars: &[u8]) -> [bool; 128] {
    let mut table = [false; 128];
    mark_all(&mut table, chars);
    table
}

const fn mark_all(table: &mut [bool; 128], chars: &[u8]) {
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] = true;
        i += 1;
    }
}

pub(crate) fn decode_hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

pub(crate) fn push_percent_encoded(out: &mut String, b: u8) {
    out.push('%');
    out.push(HEX_UPPER[(b >> 4) as usize] as char);
    out.push(HEX_UPPER[(b & 0x0F) as usize] as char);
}
