//! Reading rule module files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::codec;
use crate::error::ReadError;
use crate::types::WideText;

/// Source of rule module text.
///
/// The resolver performs every probe through this trait, so an implementation
/// sees exactly which paths are tried and in what order.
pub trait ModuleReader: Send + Sync {
    /// Read the complete content of `path` as wide text.
    fn read(&self, path: &Path) -> Result<WideText, ReadError>;
}

/// Reads rule modules from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl ModuleReader for FsReader {
    fn read(&self, path: &Path) -> Result<WideText, ReadError> {
        read_file(path)
    }
}

impl<R: ModuleReader + ?Sized> ModuleReader for Arc<R> {
    fn read(&self, path: &Path) -> Result<WideText, ReadError> {
        (**self).read(path)
    }
}

impl<R: ModuleReader + ?Sized> ModuleReader for Box<R> {
    fn read(&self, path: &Path) -> Result<WideText, ReadError> {
        (**self).read(path)
    }
}

/// Read a UTF-8 file into a wide-character buffer.
///
/// A missing or unopenable file is reported as [`ReadError::Io`]; content
/// that is not UTF-8 as [`ReadError::Encoding`].
pub fn read_file(path: &Path) -> Result<WideText, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    codec::to_wide(&bytes).map_err(|source| {
        warn!(path = %path.display(), %source, "rule module is not valid UTF-8");
        ReadError::Encoding {
            path: path.to_path_buf(),
            source,
        }
    })
}
