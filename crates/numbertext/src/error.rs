//! Error types for number spelling.

use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

use crate::types::LanguageTag;

/// Byte text that is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid UTF-8 sequence at byte {valid_up_to}")]
pub struct EncodingError {
    valid_up_to: usize,
}

impl EncodingError {
    /// Number of leading bytes that were valid UTF-8.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl From<Utf8Error> for EncodingError {
    fn from(e: Utf8Error) -> Self {
        Self {
            valid_up_to: e.valid_up_to(),
        }
    }
}

/// A single rule module file could not be read.
///
/// This is the expected outcome for most fallback probes and is never fatal
/// on its own.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file is absent or could not be opened.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but its content is not UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: EncodingError,
    },
}

impl ReadError {
    /// The path that failed.
    pub fn path(&self) -> &Path {
        match self {
            ReadError::Io { path, .. } | ReadError::Encoding { path, .. } => path,
        }
    }
}

/// Errors that occur while locating and loading a rule module.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No fallback tier produced a readable rule module file.
    #[error("no rule module for '{language}', tried: {}", display_paths(tried))]
    NotFound {
        language: LanguageTag,
        tried: Vec<PathBuf>,
    },
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The module file extension is empty.
    #[error("module file extension must not be empty")]
    EmptyExtension,
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
