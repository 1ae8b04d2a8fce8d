use crate::headers::block::HeaderBlock;
use crate::headers::names::{CONNECTION, UPGRADE};
use ahash::RandomState;
use std::collections::HashSet;

pub(crate) const TRAILERS: &str = "trailers";

/// Hop-by-hop context of one inbound header block.
#[derive(Debug, Default)]
pub(crate) struct ConnectionOptions {
    /// Lowercased field names listed in `Connection` (RFC 9110 §7.6.1).
    nominees: HashSet<String, RandomState>,
    websocket_upgrade: bool,
}

impl ConnectionOptions {
    pub(crate) fn from_block(block: &HeaderBlock) -> Self {
        let mut nominees = HashSet::default();
        for value in block.get_all(CONNECTION) {
            for token in value.split(',') {
                let token = token.trim().to_ascii_lowercase();
                if !token.is_empty() {
                    nominees.insert(token);
                }
            }
        }

        let websocket_upgrade = nominees.contains(UPGRADE)
            && block
                .get_all(UPGRADE)
                .any(|v| v.trim().eq_ignore_ascii_case("websocket"));

        Self {
            nominees,
            websocket_upgrade,
        }
    }

    pub(crate) fn is_nominated(&self, name: &str) -> bool {
        self.nominees.contains(name)
    }

    /// A WebSocket handshake keeps `connection: upgrade` and
    /// `upgrade: websocket` so the upgrade can be completed downstream.
    pub(crate) fn keeps_upgrade_field(&self, name: &str) -> bool {
        self.websocket_upgrade && (name == CONNECTION || name == UPGRADE)
    }
}

/// RFC 9113 §8.2.2: `TE` may only carry `trailers`. Returns true when any
/// comma-separated token of any `TE` value is exactly `trailers`.
pub(crate) fn te_allows_trailers<'a>(values: impl IntoIterator<Item = &'a str>) -> bool {
    values.into_iter().any(|value| {
        value
            .split(',')
            .any(|token| token.trim().eq_ignore_ascii_case(TRAILERS))
    })
}
