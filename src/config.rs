//! TOML configuration for the `primesift` command line.
//!
//! Every key is optional. Values here sit between the built-in defaults and
//! explicit command-line flags (or their environment variables):
//!
//! ```toml
//! segment_size = 32768
//! format = "json"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Block width used by `segmented` when neither a flag nor the config sets one.
///
/// 32768 bits is 4 KiB of bitmap, small enough to stay in L1 cache.
pub const DEFAULT_SEGMENT_SIZE: u64 = 32_768;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One prime per line.
    #[default]
    Text,
    /// Pretty-printed `SieveReport` JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format: {} (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SieveConfig {
    pub segment_size: Option<u64>,
    pub format: Option<OutputFormat>,
}

impl SieveConfig {
    /// Parse a configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<SieveConfig> {
        let config: SieveConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML file path.
    pub fn parse_toml_file(path: &Path) -> Result<SieveConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.segment_size == Some(0) {
            anyhow::bail!("segment_size must be at least 1");
        }
        Ok(())
    }
}

/// Resolve the segment width: explicit value first, then config, then default.
pub fn resolve_segment_size(explicit: Option<u64>, config: &SieveConfig) -> u64 {
    explicit
        .or(config.segment_size)
        .unwrap_or(DEFAULT_SEGMENT_SIZE)
}

/// Resolve the output format the same way.
pub fn resolve_format(explicit: Option<OutputFormat>, config: &SieveConfig) -> OutputFormat {
    explicit.or(config.format).unwrap_or_default()
}
