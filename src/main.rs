//! tiny-scan - runs the TINY scanner over a source file.
//!
//! Prints the scanner listing (echoed source and token trace) to stdout and
//! reports every lexical error on stderr.

use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tiny_scanner::{
    config::{ScanConfig, CONFIG_FILE_NAME},
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Scanner,
    listing::WriterListing,
    render_error,
};

/// Scan a TINY source file and print its token listing
#[derive(Parser, Debug)]
#[command(name = "tiny-scan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a TINY source file and print its token listing", long_about = None)]
struct Cli {
    /// TINY source file to scan
    file: PathBuf,

    /// Echo each source line to the listing as it is read
    #[arg(short, long)]
    echo: bool,

    /// Print every token to the listing
    #[arg(short, long)]
    trace: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "TINY_SCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable color output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    config.echo_source |= cli.echo;
    config.trace_scan |= cli.trace;

    let errors = scan_file(&cli.file, config)?;

    if errors > 0 {
        info!(errors, "scan finished with lexical errors");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Uses the explicit config if given, then `tiny-scan.toml` in the working
/// directory, then defaults. Command-line flags can only switch options on.
fn load_config(path: Option<&Path>) -> Result<ScanConfig> {
    if let Some(path) = path {
        return Ok(ScanConfig::load_from_path(path)?);
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.exists() {
        debug!(path = %local.display(), "using local config");
        return Ok(ScanConfig::load_from_path(local)?);
    }

    Ok(ScanConfig::default())
}

/// Scans `file` to the end and returns how many lexical errors were found.
fn scan_file(file: &Path, config: ScanConfig) -> Result<usize> {
    let name = file.display().to_string();
    let reader = BufReader::new(
        File::open(file).with_context(|| format!("failed to open {}", name))?,
    );

    let stdout = io::stdout().lock();
    let mut listing = WriterListing::new(stdout);
    listing.write_line(&format!("\nTINY COMPILATION: {}", name))?;

    let mut scanner = Scanner::with_listing(reader, config, listing);
    let mut errors = Vec::new();
    loop {
        let token = scanner.next_token();
        if let Some(error) = Error::from_token(&token) {
            errors.push(error);
        }
        if token.is_eof() {
            break;
        }
    }

    if let Some(err) = scanner.take_read_error() {
        errors.push(Error::new(
            ErrorImpl::SourceRead {
                message: err.to_string(),
            },
            scanner.line(),
        ));
    }

    debug!(lines = scanner.line(), errors = errors.len(), "scan complete");

    if !errors.is_empty() {
        let source = fs::read_to_string(file).unwrap_or_default();
        for error in &errors {
            eprint!("{}", render_error(error, &name, &source));
        }
    }

    Ok(errors.len())
}
