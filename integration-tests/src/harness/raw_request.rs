use wirenorm_core::headers::HeaderBlock;
use wirenorm_core::normalization::RawRequestHead;

/// Builder for HTTP/1 request heads, for tests that want to spell out a
/// request field by field.
#[derive(Debug, Clone)]
pub struct RawHead {
    method: String,
    target: String,
    headers: HeaderBlock,
    end_of_stream: bool,
}

impl RawHead {
    pub fn get(target: &str) -> Self {
        Self::new("GET", target)
    }

    pub fn new(method: &str, target: &str) -> Self {
        Self {
            method: method.to_string(),
            target: target.to_string(),
            headers: HeaderBlock::new(),
            end_of_stream: true,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push(name, value);
        self
    }

    /// Marks the head as followed by a body.
    pub fn with_body(mut self) -> Self {
        self.end_of_stream = false;
        self
    }

    pub fn build(self) -> RawRequestHead {
        RawRequestHead::http1(self.method, self.target, self.headers, self.end_of_stream)
    }
}

/// Splits raw HTTP/1 head bytes (`"GET / HTTP/1.1\r\nHost: a\r\n\r\n"`) into
/// a request head. Only the request line and field lines are read; returns
/// `None` when the request line is malformed.
pub fn parse_http1_head(raw: &str) -> Option<RawRequestHead> {
    let head = raw.split("\r\n\r\n").next()?;
    let mut lines = head.split("\r\n");

    let mut request_line = lines.next()?.split(' ');
    let method = request_line.next()?;
    let target = request_line.next()?;
    request_line.next().filter(|v| v.starts_with("HTTP/1."))?;

    let headers: HeaderBlock = lines
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name, value.trim()))
        .collect();

    let end_of_stream = !headers.contains("content-length") && !headers.contains("transfer-encoding");
    Some(RawRequestHead::http1(method, target, headers, end_of_stream))
}
