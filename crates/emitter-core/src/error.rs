//! Error types for emitter-core

use std::path::PathBuf;

/// Result type for emitter operations
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors that can occur while emitting a configuration file
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Wrong number of command-line arguments
    #[error("Usage: {program} <output_file>")]
    Usage { program: String },

    /// The output path could not be opened for writing
    #[error("Error: Could not open file {} for writing", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but writing or flushing it failed
    #[error("Error: Could not write file {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    pub fn usage(program: impl Into<String>) -> Self {
        Self::Usage {
            program: program.into(),
        }
    }

    pub fn open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::OpenFailed { .. } | Self::WriteFailed { .. } => 1,
        }
    }
}
