use serde::Serialize;
use smallvec::SmallVec;

/// One `name[=value]` directive of a header such as `Cache-Control`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub name: String,
    pub value: Option<String>,
}

pub type DirectiveMap = SmallVec<[Directive; 4]>;

/// Parses comma-separated directives in order of appearance.
///
/// Names are trimmed and lowercased and directives with an empty name are
/// skipped. Values are trimmed unless quoted; quotes are removed and an empty
/// value is reported as `None`.
pub fn parse_directives(directives: &str) -> DirectiveMap {
    let bytes = directives.as_bytes();
    let len = bytes.len();
    let mut out = DirectiveMap::new();
    let mut i = 0;

    while i < len {
        let name_start = i;
        while i < len && bytes[i] != b',' && bytes[i] != b'=' {
            i += 1;
        }
        let name = directives[name_start..i].trim();

        let value = if i == len || bytes[i] == b',' {
            i += 1;
            None
        } else {
            // skip '=' and leading whitespace
            i += 1;
            while i < len && matches!(bytes[i], b' ' | b'\t') {
                i += 1;
            }

            if i < len && bytes[i] == b'"' {
                i += 1;
                let value_start = i;
                while i < len && bytes[i] != b'"' {
                    i += 1;
                }
                let value = &directives[value_start..i];
                while i < len && bytes[i] != b',' {
                    i += 1;
                }
                i += 1;
                Some(value)
            } else {
                let value_start = i;
                while i < len && bytes[i] != b',' {
                    i += 1;
                }
                let value = directives[value_start..i].trim();
                i += 1;
                Some(value)
            }
        };

        if !name.is_empty() {
            out.push(Directive {
                name: name.to_ascii_lowercase(),
                value: value.filter(|v| !v.is_empty()).map(str::to_string),
            });
        }
    }

    out
}

/// Interprets a directive value such as `max-age=86400` as seconds.
/// Returns `None` for a missing, negative or non-numeric value.
pub fn parse_directive_value_as_seconds(value: Option<&str>) -> Option<u64> {
    value?.parse::<u64>().ok()
}
