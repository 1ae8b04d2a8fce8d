mod authority;
mod block;
mod connection;
mod cookie;
mod directives;
mod error;
mod inbound;
pub mod names;
mod outbound;
#[cfg(test)]
mod tests;
mod translator;
mod types;

pub use authority::add_http2_authority;
pub use block::{HeaderBlock, HeaderEntry};
pub use cookie::{join_cookies, split_cookie};
pub use directives::{Directive, DirectiveMap, parse_directive_value_as_seconds, parse_directives};
pub use error::HeaderError;
pub use inbound::translate_inbound;
pub use names::is_trailer_disallowed;
pub use outbound::{Http1HeaderNaming, translate_outbound};
pub use translator::{HeaderOptions, HeaderTranslator};
pub use types::*;
