use crate::conf::error::ConfigError;
use crate::conf::types::NormalizationConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Path reported for configuration that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

pub fn load_config(path: &Path) -> Result<NormalizationConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse(&s, path)?;
    debug!(path = %path.display(), ?config, "loaded normalization config");
    Ok(config)
}

pub fn load_config_str(s: &str) -> Result<NormalizationConfig, ConfigError> {
    parse(s, Path::new(INLINE_SOURCE))
}

fn parse(s: &str, path: &Path) -> Result<NormalizationConfig, ConfigError> {
    hcl::from_str(s).map_err(|e| ConfigError::parse(path, e))
}
