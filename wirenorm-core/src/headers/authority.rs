use crate::headers::error::HeaderError;
use crate::headers::types::HeadersBuilder;
use crate::target::strip_userinfo;

/// Sets `:authority` from a host string, dropping any user-info.
///
/// `None` leaves the builder untouched and `""` sets an empty authority, but
/// an authority that only becomes empty once the user-info is removed
/// (`"user@"`) is an error.
pub fn add_http2_authority(
    authority: Option<&str>,
    builder: &mut HeadersBuilder,
) -> Result<(), HeaderError> {
    let Some(authority) = authority else {
        return Ok(());
    };
    if authority.is_empty() {
        builder.authority("");
        return Ok(());
    }

    let host = strip_userinfo(authority);
    if host.is_empty() {
        return Err(HeaderError::EmptyAuthority {
            authority: authority.to_string(),
        });
    }
    builder.authority(host);
    Ok(())
}
