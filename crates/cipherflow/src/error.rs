//! Error types for Cipherflow operations.

use std::io;

use thiserror::Error;

/// The main error type for Cipherflow operations.
///
/// The renderer itself has no recoverable-error path: dangling edges are
/// dropped silently and an unattached renderer is a no-op. These variants
/// cover the surrounding surfaces of the library, export and front ends.
#[derive(Debug, Error)]
pub enum CipherflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown diagram '{0}'")]
    UnknownDiagram(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CipherflowError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
