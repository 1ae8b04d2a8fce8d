mod normalized_request;
mod request;
#[cfg(test)]
mod tests;
mod types;

pub use normalized_request::*;
pub use request::*;
pub use types::*;
