use std::io;

use thiserror::Error;

/// Errors raised while building or serializing a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("I/O error while writing PDF: {0}")]
    Io(#[from] io::Error),

    /// A drawing call was made before a page was begun.
    #[error("no open page: call begin_page (or Layout::add_page) first")]
    NoOpenPage,
}

pub type Result<T> = std::result::Result<T, PdfError>;
