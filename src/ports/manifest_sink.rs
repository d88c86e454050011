//! Write access to the render output location.

use std::path::Path;

use crate::domain::AppError;

/// Port for persisting rendered files.
pub trait ManifestSink {
    /// Write `content` to `path`, creating parent directories and replacing
    /// any existing file.
    ///
    /// Implementations report failures as [`AppError::OutputWrite`].
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
