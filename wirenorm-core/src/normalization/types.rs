use serde::Serialize;
use thiserror::Error;

#[derive(Debug)]
pub enum NormalizationOutcome<T> {
    Accept(T),
    Rewrite { value: T, reason: RewriteReason },
    Reject { reason: RejectReason },
}

impl<T> NormalizationOutcome<T> {
    pub fn reject(reason: RejectReason) -> Self {
        Self::Reject { reason }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject { .. })
    }

    /// Returns the normalized value of an accepted or rewritten outcome.
    pub fn into_value(self) -> Result<T, RejectReason> {
        match self {
            Self::Accept(value) | Self::Rewrite { value, .. } => Ok(value),
            Self::Reject { reason } => Err(reason),
        }
    }
}

/// Why a piece of wire input was refused.
///
/// Rejections are ordinary values: the connection layer maps every reason to a
/// 400-class response (server) or a request construction failure (client).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("empty request target")]
    EmptyPath,

    #[error("relative request target")]
    RelativePath,

    #[error("malformed percent-encoding")]
    InvalidPercentEncoding,

    #[error("control character in request target")]
    ControlCharacter,

    #[error("path traversal")]
    PathTraversal,

    #[error("invalid matrix variable")]
    InvalidMatrixVariable,

    #[error("absolute-form target not allowed")]
    AbsoluteFormNotAllowed,

    #[error("invalid scheme")]
    InvalidScheme,

    #[error("invalid authority")]
    InvalidAuthority,

    #[error("path prefix is not an absolute path")]
    InvalidPrefix,

    #[error("invalid request method")]
    InvalidMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteReason {
    PathCanonicalization,
    QueryCanonicalization,
}
