mod authority;
mod bytes;
mod matrix;
mod parser;
mod paths;
mod tables;
#[cfg(test)]
mod tests;
mod types;

pub use authority::{default_port, find_authority, is_absolute_uri, validate_scheme};
pub(crate) use authority::strip_userinfo;
pub use matrix::remove_matrix_variables;
pub use parser::{parse_for_client, parse_for_server, parse_for_server_with};
pub use paths::{concat_paths, decode_path, decode_path_param};
pub use types::*;
