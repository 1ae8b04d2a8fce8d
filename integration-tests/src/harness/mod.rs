pub mod raw_request;
pub mod tracing;

pub use raw_request::{RawHead, parse_http1_head};
pub use tracing::{CapturedEvent, capture_events};
