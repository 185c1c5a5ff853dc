use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for build operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for the syntax page build
#[derive(Debug)]
pub enum BuildError {
    /// An input document could not be read
    Read { path: PathBuf, source: io::Error },
    /// The output document could not be written
    Write { path: PathBuf, source: io::Error },
    /// The Markdown converter rejected the document
    Conversion(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            BuildError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            BuildError::Conversion(msg) => write!(f, "Markdown conversion error: {}", msg),
            BuildError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::Read { source, .. } | BuildError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
