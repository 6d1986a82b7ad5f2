use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use seed_docs::config::{Config, DEFAULT_OUTPUT_DIR};
use seed_docs::generate_all;

/// Write the IPv4 reference sheet and the example document as PDFs.
#[derive(Parser, Debug)]
#[command(name = "seed-docs", version, about)]
struct Cli {
    /// Directory the PDFs are written to (created if missing)
    #[arg(long, env = "SEED_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Deflate page content streams
    #[arg(long)]
    compress: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::default()
            .with_output_dir(cli.output_dir)
            .with_compression(cli.compress)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from(cli);
    debug!(?config, "starting");

    let files = generate_all(&config)
        .with_context(|| format!("generating PDFs in {}", config.output_dir.display()))?;
    for file in &files {
        println!("\u{2713} Created: {}", file.path.display());
    }
    Ok(())
}
