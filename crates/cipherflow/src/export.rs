//! Export backends for rendered scenes.

pub mod svg;

use thiserror::Error;

/// Errors produced by export backends.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
