//! CLI configuration via `ethiocal.toml`
//!
//! Read from the working directory, or from `--config <path>`. A missing
//! default file means defaults; a missing explicit file is an error.
//! Command-line flags override whatever the file sets.

use std::path::Path;

use anyhow::{Context, Result};
use ethiocal_core::MonthScript;
use serde::{Deserialize, Serialize};

use crate::format::OutputMode;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ethiocal.toml";

/// Settings loaded from `ethiocal.toml`.
///
/// # Example
///
/// ```toml
/// output = "human"   # "human", "json" or "raw"
/// script = "latin"   # "latin" or "geez"
/// # log = "ethiocal=debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output mode when neither `--json` nor `--raw` is given.
    #[serde(default)]
    pub output: OutputMode,
    /// Month-name script when `--script` is not given.
    #[serde(default)]
    pub script: MonthScript,
    /// Log filter directive, used when `ETHIOCAL_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl CliConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# ethiocal configuration
#
# Output mode: "human" (default), "json" or "raw"
output = "human"

# Month names: "latin" (default) or "geez"
script = "latin"

# Log filter (tracing EnvFilter syntax). ETHIOCAL_LOG overrides it.
# log = "ethiocal_core=trace"
"#
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Load the explicit config file, or the default one if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
