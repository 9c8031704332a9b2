//! `index.html` rendering.
//!
//! Each `<img>` points at the remote URL, not at the local `imgN` copy.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const INDEX_FILE: &str = "index.html";

const HTML_HEAD: &str = "<html>\n        <head></head>\n        <body>\n        ";
const HTML_TAIL: &str = "</body></html>";

pub fn render_index_html(urls: &[String]) -> String {
    let mut html = String::from(HTML_HEAD);
    for url in urls {
        html.push_str(&format!("<img src={}></img>", url));
    }
    html.push_str(HTML_TAIL);
    html
}

/// Write `dest_dir/index.html`, replacing any previous one.
pub fn write_index(dest_dir: &Path, urls: &[String]) -> Result<()> {
    let path = dest_dir.join(INDEX_FILE);
    fs::write(&path, render_index_html(urls))
        .with_context(|| format!("write {}", path.display()))
}
