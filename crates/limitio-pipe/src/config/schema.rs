use serde::Deserialize;
use limitio_core::error::{LimitioError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipeConfig {
    pub version: u32,

    #[serde(default = "default_buffer_bytes")]
    pub buffer_bytes: usize,

    /// Cap on bytes taken from the input. Absent means unbounded.
    #[serde(default)]
    pub read: Option<LimitSection>,

    /// Cap on bytes forwarded to the output. Absent means unbounded.
    #[serde(default)]
    pub write: Option<LimitSection>,
}

impl PipeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(LimitioError::UnsupportedVersion);
        }
        if !(512..=1_048_576).contains(&self.buffer_bytes) {
            return Err(LimitioError::BadConfig(
                "buffer_bytes must be between 512 and 1048576".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            buffer_bytes: default_buffer_bytes(),
            read: None,
            write: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitSection {
    pub limit_bytes: usize,

    /// Overflow reads as end of input / writes as success instead of failing.
    #[serde(default)]
    pub permissive: bool,
}

fn default_buffer_bytes() -> usize {
    8192
}
