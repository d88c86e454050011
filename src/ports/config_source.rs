//! Read access to input configuration documents.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading configuration documents.
pub trait ConfigSource {
    /// Read a document as UTF-8 text.
    ///
    /// Implementations report failures as [`AppError::ConfigRead`].
    fn read_document(&self, path: &Path) -> Result<String, AppError>;
}
