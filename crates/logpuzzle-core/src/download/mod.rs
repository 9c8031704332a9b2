//! Sequential image download into a destination directory.
//!
//! URL `i` is stored as `img{i}`; after the last fetch an `index.html` is
//! written. The first failed fetch aborts the run and no index is written.

mod index;

pub use index::{render_index_html, write_index, INDEX_FILE};

use crate::fetch::Fetcher;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Local file name for the image at position `index`.
pub fn image_path(dest_dir: &Path, index: usize) -> PathBuf {
    dest_dir.join(format!("img{}", index))
}

/// Create `dest_dir` if missing. Only the last component is created; missing
/// parents are an error.
pub fn ensure_dest_dir(dest_dir: &Path) -> Result<()> {
    if dest_dir.exists() {
        return Ok(());
    }
    fs::create_dir(dest_dir).with_context(|| format!("create {}", dest_dir.display()))?;
    tracing::debug!("created {}", dest_dir.display());
    Ok(())
}

/// Fetch every URL in order into `dest_dir`, then write `index.html`.
/// A progress line is written to `out` before each fetch.
pub fn download_images<F, W>(
    urls: &[String],
    dest_dir: &Path,
    fetcher: &mut F,
    out: &mut W,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    ensure_dest_dir(dest_dir)?;

    for (i, url) in urls.iter().enumerate() {
        writeln!(out, "Retrieving {} image(s)...", i + 1)?;
        out.flush()?;
        let path = image_path(dest_dir, i);
        let bytes = fetcher
            .fetch_to(url, &path)
            .with_context(|| format!("image {} of {}", i + 1, urls.len()))?;
        tracing::debug!(url = %url, bytes, "saved {}", path.display());
    }

    write_index(dest_dir, urls)?;
    tracing::info!("downloaded {} image(s) into {}", urls.len(), dest_dir.display());
    Ok(())
}
