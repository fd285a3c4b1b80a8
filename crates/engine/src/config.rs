//! Ledger configuration via `docledger.toml`
//!
//! A missing file means defaults. To change settings, edit the file and
//! reopen the ledger.

use serde::{Deserialize, Serialize};
use std::path::Path;

use docledger_core::{Error, RangeMode, Result};

/// Config file name looked up next to the data the ledger serves.
pub const CONFIG_FILE_NAME: &str = "docledger.toml";

/// Ledger configuration loaded from `docledger.toml`.
///
/// # Example
///
/// ```toml
/// # "heuristic" (default) scans [docType0, docTypez)
/// # "prefix" scans every key starting with the doc type
/// range_bounds = "heuristic"
///
/// # Use the store's write-if-absent primitive for creates when available
/// conditional_create = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Range bound strategy: `"heuristic"` or `"prefix"`.
    #[serde(default = "default_range_bounds")]
    pub range_bounds: String,
    /// Make creates atomic through `put_if_absent` when the store offers it.
    #[serde(default = "default_conditional_create")]
    pub conditional_create: bool,
}

fn default_range_bounds() -> String {
    RangeMode::Heuristic.as_str().to_string()
}

fn default_conditional_create() -> bool {
    true
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            range_bounds: default_range_bounds(),
            conditional_create: default_conditional_create(),
        }
    }
}

impl LedgerConfig {
    /// Config selecting the given range mode, other settings default.
    pub fn with_range_mode(mode: RangeMode) -> Self {
        Self {
            range_bounds: mode.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Parse the `range_bounds` string into a `RangeMode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"heuristic"` or `"prefix"`.
    pub fn range_mode(&self) -> Result<RangeMode> {
        RangeMode::from_name(&self.range_bounds).ok_or_else(|| {
            Error::invalid_input(format!(
                "Invalid range_bounds '{}' in {}. Expected \"heuristic\" or \"prefix\".",
                self.range_bounds, CONFIG_FILE_NAME
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docledger configuration
#
# Range bounds used to scan all documents of one type:
#   "heuristic" = [docType0, docTypez), identities must start with a
#                 character between '0' and 'y' to be listed
#   "prefix"    = every key that starts with the doc type
range_bounds = "heuristic"

# Use the store's write-if-absent primitive for creates when available.
# With false, creates check existence and then write (single-writer only).
conditional_create = true
"#
    }

    /// Parse config from TOML text, validating the range mode eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names an unknown mode.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LedgerConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_input(format!("Failed to parse config: {}", e)))?;
        config.range_mode()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Storage(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidInput { reason } => {
                Error::invalid_input(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })
    }

    /// Read config from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Storage(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
