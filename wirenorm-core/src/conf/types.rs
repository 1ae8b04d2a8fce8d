use crate::headers::HeaderOptions;
use crate::target::TargetOptions;
use serde::{Deserialize, Serialize};

/// Everything that tunes normalization. Every block is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizationConfig {
    pub target: TargetOptions,
    pub headers: HeaderOptions,
}
