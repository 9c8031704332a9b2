//! CLI for logpuzzle.

use anyhow::Result;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{CommandFactory, Parser};
use logpuzzle_core::config::LogpuzzleConfig;
use logpuzzle_core::download;
use logpuzzle_core::extract;
use logpuzzle_core::fetch::{CurlFetcher, FetchOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Find puzzle image URLs in an Apache log and optionally download them.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
#[command(about = "Extract and download puzzle images from an Apache logfile", long_about = None)]
pub struct Cli {
    /// Destination directory for downloaded images.
    #[arg(
        short = 'd',
        long = "todir",
        value_name = "TODIR",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub todir: Option<PathBuf>,

    /// Apache logfile to extract urls from.
    pub logfile: PathBuf,
}

impl Cli {
    /// Destination directory, treating an empty `--todir ""` as absent.
    pub fn dest_dir(&self) -> Option<&Path> {
        self.todir
            .as_deref()
            .filter(|d| !d.as_os_str().is_empty())
    }
}

/// Usage line on stderr.
pub fn print_usage() {
    eprintln!("{}", Cli::command().render_usage());
}

pub fn run_from_args(cfg: &LogpuzzleConfig) -> Result<()> {
    let cli = Cli::parse();
    tracing::debug!("parsed args: {:?}", cli);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, cfg, &mut out)
}

/// Extract URLs from the logfile; download them when a destination is given,
/// otherwise print them one per line.
pub fn run<W: Write>(cli: &Cli, cfg: &LogpuzzleConfig, out: &mut W) -> Result<()> {
    let urls = extract::read_urls(&cli.logfile, &cfg.host_prefix, out)?;

    match cli.dest_dir() {
        Some(dir) => {
            let mut fetcher = CurlFetcher::new(FetchOptions::from_config(cfg));
            download::download_images(&urls, dir, &mut fetcher, out)?;
        }
        None => writeln!(out, "{}", urls.join("\n"))?,
    }
    out.flush()?;
    Ok(())
}
