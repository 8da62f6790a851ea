//! Template I/O errors

use std::io;

use thiserror::Error;

/// Errors raised while moving a template in or out of a stream
///
/// Both kinds come from the underlying stream. Looking up the co-author
/// never fails.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The source stream failed before end-of-stream
    #[error("failed to read template: {0}")]
    Read(#[source] io::Error),

    /// The destination stream rejected a write
    #[error("failed to write template: {0}")]
    Write(#[source] io::Error),
}

impl TemplateError {
    /// Underlying I/O error
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        match self {
            Self::Read(e) | Self::Write(e) => e,
        }
    }
}
