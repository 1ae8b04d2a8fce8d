pub mod conf;
pub mod directives;
pub mod headers;
mod output;
pub mod target;
