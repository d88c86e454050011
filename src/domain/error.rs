use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for etcd-render operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An input document could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input document does not match the expected shape.
    #[error("Failed to parse {what} from {}: {details}", path.display())]
    ConfigParse { what: String, path: PathBuf, details: String },

    /// A listed address range is not valid CIDR notation.
    #[error("Invalid CIDR '{value}' in {field}: {source}")]
    InvalidCidr {
        field: String,
        value: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    /// A template failed to load or render.
    #[error("Failed to render template '{template}': {source}")]
    TemplateRender {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// A rendered file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template directory (or one of its manifest groups) is missing.
    #[error("Template directory not found: {}", .0.display())]
    TemplatesNotFound(PathBuf),

    /// Invalid render options.
    #[error("{0}")]
    Configuration(String),

    /// Underlying I/O failure outside of reading inputs or writing outputs.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn config_parse<W: Into<String>, D: ToString>(
        what: W,
        path: impl Into<PathBuf>,
        details: D,
    ) -> Self {
        AppError::ConfigParse { what: what.into(), path: path.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::ConfigRead { source, .. } | AppError::OutputWrite { source, .. } => {
                source.kind()
            }
            AppError::Io(err) => err.kind(),
            AppError::ConfigParse { .. }
            | AppError::InvalidCidr { .. }
            | AppError::TemplateRender { .. }
            | AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::TemplatesNotFound(_) => io::ErrorKind::NotFound,
        }
    }
}
