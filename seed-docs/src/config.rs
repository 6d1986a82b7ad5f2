use std::path::PathBuf;

/// Directory the documents are written to when nothing else is given.
pub const DEFAULT_OUTPUT_DIR: &str = "uploads/11";

/// Runtime settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Created (with parents) if missing; existing files are overwritten.
    pub output_dir: PathBuf,
    /// Deflate page content streams.
    pub compress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            compress: false,
        }
    }
}

impl Config {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
