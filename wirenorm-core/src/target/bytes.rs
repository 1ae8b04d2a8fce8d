use crate::target::tables::{Component, push_percent_encoded};

/// A decoded component: raw bytes plus a per-byte flag telling whether the
/// byte must be written back out percent-encoded.
#[derive(Debug, Default)]
pub(crate) struct DecodedBytes {
    data: Vec<u8>,
    encoded: Vec<bool>,
    num_encoded: usize,
}

impl DecodedBytes {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            encoded: Vec::with_capacity(capacity),
            num_encoded: 0,
        }
    }

    pub(crate) fn push(&mut self, b: u8) {
        self.data.push(b);
        self.encoded.push(false);
    }

    pub(crate) fn push_encoded(&mut self, b: u8) {
        self.data.push(b);
        self.encoded.push(true);
        self.num_encoded += 1;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn is_encoded(&self, index: usize) -> bool {
        self.encoded.get(index).copied().unwrap_or(false)
    }

    /// True when the component is exactly the unescaped byte `b`.
    pub(crate) fn is_single(&self, b: u8) -> bool {
        self.data.len() == 1 && self.data[0] == b && !self.encoded[0]
    }

    /// A relative path is empty, does not begin with `/`, or begins with an
    /// escaped `/`.
    pub(crate) fn is_relative_path(&self) -> bool {
        self.data.first() != Some(&b'/') || self.is_encoded(0)
    }

    /// Writes the component back out. Unescaped bytes are always ASCII, so the
    /// result is valid UTF-8.
    pub(crate) fn encode(&self, component: Component) -> String {
        let mut out = String::with_capacity(self.data.len() + self.num_encoded * 2);
        for (i, &b) in self.data.iter().enumerate() {
            if !self.encoded[i] {
                out.push(b as char);
            } else if b == b' ' && component == Component::Query {
                out.push('+');
            } else {
                push_percent_encoded(&mut out, b);
            }
        }
        out
    }
}
