//! Puzzle URL extraction from Apache access logs.
//!
//! Reads the log line by line, keeps the first puzzle path found on each line,
//! prefixes the configured host, removes duplicates and orders the result by
//! [`SortKey`].

mod pattern;

pub use pattern::{match_line, sort_key, PuzzleMatch, SortKey};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Unique puzzle URLs from `reader`, stable-sorted by suffix key.
/// Equal keys keep first-seen order.
pub fn collect_urls<R: BufRead>(reader: R, host: &str) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut matches: Vec<PuzzleMatch> = Vec::new();
    let mut lines = 0usize;

    for line in reader.lines() {
        let line = line.context("read log line")?;
        lines += 1;
        if let Some(m) = match_line(&line, host) {
            if seen.insert(m.full_url.clone()) {
                tracing::debug!(url = %m.full_url, "puzzle url");
                matches.push(m);
            }
        }
    }

    matches.sort_by(|a, b| a.suffix_key.cmp(&b.suffix_key));
    tracing::info!("{} unique puzzle url(s) in {} line(s)", matches.len(), lines);
    Ok(matches.into_iter().map(|m| m.full_url).collect())
}

/// Read the log at `path` and return its sorted puzzle URLs.
///
/// Every URL is also echoed to `out`, each followed by a blank line.
pub fn read_urls<W: Write>(path: &Path, host: &str, out: &mut W) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let urls = collect_urls(BufReader::new(file), host)
        .with_context(|| format!("read {}", path.display()))?;
    for url in &urls {
        write!(out, "{}\n\n", url)?;
    }
    Ok(urls)
}
