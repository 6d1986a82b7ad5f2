use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::content::{self, SeedDocument};
use crate::error::{Result, SeedError};
use crate::render::{render, RenderOptions};

/// A document that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Write every seeded document into `config.output_dir`, creating the
/// directory first. Existing files are replaced; the output is the
/// same on every run.
pub fn generate_all(config: &Config) -> Result<Vec<GeneratedFile>> {
    ensure_dir(&config.output_dir)?;
    content::all()
        .into_iter()
        .map(|doc| generate(doc, config))
        .collect()
}

/// Render one document and write it to `config.output_dir`. The
/// directory must already exist.
pub fn generate(doc: &SeedDocument, config: &Config) -> Result<GeneratedFile> {
    let options = RenderOptions {
        compress: config.compress,
    };
    let bytes = render(doc, &options).map_err(|source| SeedError::Render {
        file: doc.file_name,
        source,
    })?;

    let path = config.output_dir.join(doc.file_name);
    fs::write(&path, &bytes).map_err(|source| SeedError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(GeneratedFile {
        path,
        bytes: bytes.len(),
    })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "creating output directory");
    fs::create_dir_all(dir).map_err(|source| SeedError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
