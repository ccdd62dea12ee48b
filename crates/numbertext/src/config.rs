//! Deserializable settings for where rule modules live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::resolver::{DEFAULT_EXTENSION, Resolver};

/// Rule module location settings.
///
/// Missing fields take their defaults, so an empty document is valid.
///
/// # Example
///
/// ```
/// use numbertext::Config;
///
/// let config = Config::default();
/// assert_eq!(config.extension, ".sor");
/// assert!(config.module_dir.as_os_str().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding module files. Empty means the working directory.
    pub module_dir: PathBuf,

    /// Suffix of module files, including the leading dot.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_dir: PathBuf::new(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(())
    }

    /// A resolver for these settings.
    pub fn resolver(&self) -> Result<Resolver, ConfigError> {
        self.validate()?;
        Ok(Resolver::builder()
            .module_dir(self.module_dir.clone())
            .extension(self.extension.clone())
            .build())
    }
}
