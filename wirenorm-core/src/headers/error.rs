use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("authority is empty after removing user info: {authority}")]
    EmptyAuthority { authority: String },
}
