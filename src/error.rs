//! Error types for the pdf_sampler crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pdf_sampler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by document assembly, barcode rendering and read-back.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while creating directories or writing/reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The PDF renderer rejected the document content.
    #[error("PDF rendering error: {0}")]
    Render(#[from] genpdf::error::Error),

    /// The barcode input violates the rules of the chosen symbology.
    #[error("invalid {symbology} input {code:?}: {reason}")]
    Validation {
        /// Human-readable symbology name, e.g. `EAN-8`.
        symbology: &'static str,
        /// The offending code as supplied by the caller.
        code: String,
        /// Why the symbology rejected it.
        reason: String,
    },

    /// A lifecycle rule was violated, e.g. content added after close.
    #[error("invalid operation order: {0}")]
    State(&'static str),

    /// The document is encrypted and no password was supplied.
    #[error("document {path} is encrypted; a password is required")]
    Encrypted {
        /// Path of the encrypted document.
        path: PathBuf,
    },

    /// The supplied password does not unlock the document.
    #[error("invalid password")]
    InvalidPassword,

    /// A 1-indexed page number exceeded the page count.
    #[error("page {requested} is out of range (document has {available} pages)")]
    PageOutOfRange {
        /// The requested 1-indexed page number.
        requested: u32,
        /// Number of pages actually present.
        available: u32,
    },

    /// The PDF bytes could not be parsed or rewritten.
    #[error("PDF processing error: {0}")]
    Pdf(String),

    /// The bundled font family could not be located or loaded.
    #[error("font assets unavailable: {0}")]
    Fonts(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => Error::InvalidPassword,
            lopdf::Error::IO(err) => Error::Io(err),
            other => Error::Pdf(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_out_of_range_names_both_numbers() {
        let err = Error::PageOutOfRange {
            requested: 4,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "page 4 is out of range (document has 1 pages)"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing directory");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
