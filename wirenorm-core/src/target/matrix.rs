/// Strips `;name=value` matrix variables from every segment of an encoded
/// path: `/foo;a=b/bar;c=d` becomes `/foo/bar`.
///
/// Returns `None` when a segment consists only of matrix variables
/// (`/;a=b`, `/foo/;a=b/bar`), since such a segment has no name to route on.
pub fn remove_matrix_variables(path: &str) -> Option<String> {
    let Some(mut semicolon) = path.find(';') else {
        return Some(path.to_string());
    };

    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len());
    let mut start = 0;

    loop {
        if semicolon == 0 || bytes[semicolon - 1] == b'/' {
            return None;
        }
        out.push_str(&path[start..semicolon]);

        let Some(slash) = path[semicolon + 1..].find('/').map(|i| i + semicolon + 1) else {
            return Some(out);
        };
        start = slash;

        match path[start + 1..].find(';') {
            Some(i) => semicolon = i + start + 1,
            None => {
                out.push_str(&path[start..]);
                return Some(out);
            }
        }
    }
}
