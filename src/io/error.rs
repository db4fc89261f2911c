//! Error types for texture generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum TextureError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode or write a texture to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A global logger was already installed
    LoggerInit {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export texture to '{}': {source}",
                    path.display()
                )
            }
            Self::LoggerInit { source } => {
                write!(f, "Failed to initialise logging: {source}")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::LoggerInit { source } => Some(source),
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, TextureError>;

impl From<log::SetLoggerError> for TextureError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::LoggerInit { source: err }
    }
}

/// Create a file system error for an operation on a known path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TextureError {
    TextureError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
