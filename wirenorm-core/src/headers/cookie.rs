const COOKIE_SEPARATOR: &str = "; ";

/// Splits an HTTP/1 `Cookie` value into its cookie-pairs, trimming
/// whitespace and skipping empty pairs: `"a=b; c=d;"` yields `a=b`, `c=d`.
pub fn split_cookie(value: &str) -> impl Iterator<Item = &str> {
    value.split(';').map(str::trim).filter(|pair| !pair.is_empty())
}

/// Joins cookie values into the single `Cookie` field HTTP/1 requires
/// (RFC 6265 §5.4). A value's trailing `;` is dropped before joining.
pub fn join_cookies<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for value in values {
        let value = value.trim();
        let value = value.strip_suffix(';').unwrap_or(value).trim_end();
        if value.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(COOKIE_SEPARATOR);
        }
        joined.push_str(value);
    }
    joined
}
