//! Pipe config loader (strict parsing).

pub mod schema;

use std::fs;

use limitio_core::error::{LimitioError, Result};

pub use schema::{LimitSection, PipeConfig};

pub fn load_from_file(path: &str) -> Result<PipeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LimitioError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PipeConfig> {
    let cfg: PipeConfig = serde_yaml::from_str(s)
        .map_err(|e| LimitioError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
