use std::io;
use std::path::PathBuf;

use pdf_core::PdfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render {file}: {source}")]
    Render {
        file: &'static str,
        #[source]
        source: PdfError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SeedError>;
