use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use logo_inliner::{ConsoleSink, LogoPipeline, ProjectConfig};

/// Inline logo images as data URI constants and verify they are unique.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root the configured directories are resolved against
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// Explicit configuration file (defaults to `logos.config.json` in the root)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Emit zlib-compressed payloads regardless of configuration
  #[arg(long)]
  zlib: bool,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false),
    )
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let mut config = match &cli.config {
    Some(path) => ProjectConfig::from_path(path)
      .with_context(|| format!("failed to load config from {}", path.display()))?,
    None => ProjectConfig::discover(&cli.root),
  };
  if cli.zlib {
    config.with_zlib = true;
  }

  let report = LogoPipeline::new(&cli.root, &config).run(&mut ConsoleSink)?;
  tracing::debug!(watched = report.rerun_paths.len(), "run finished");
  Ok(())
}
