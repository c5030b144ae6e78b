use std::path::PathBuf;

use thiserror::Error;

/// Result type for lspgen-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors that abort a generation run.
///
/// None of these are recovered from: the first one stops the run and files
/// written before it stay on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// The mapping file could not be opened or read.
    #[error("failed to read input file `{}`", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be verified or created.
    #[error("failed to create output directory `{}`", .path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A package name could not be encoded as a string literal.
    #[error("failed to encode package for `{identifier}`")]
    Serialization {
        identifier: String,
        #[source]
        source: serde_json::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::InputUnavailable {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn output_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::OutputDirectory {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }
}
