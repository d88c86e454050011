//! Local filesystem implementation of the config and output ports.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{ConfigSource, ManifestSink};

/// Reads inputs from and writes outputs to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl ConfigSource for LocalFilesystem {
    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path)
            .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })
    }
}

impl ManifestSink for LocalFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let to_write_error = |source| AppError::OutputWrite { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(to_write_error)?;
        }
        fs::write(path, content).map_err(to_write_error)
    }
}
