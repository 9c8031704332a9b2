//! Log-line and sort-key patterns.
//!
//! Both patterns end in an unescaped `.` before `jpg`, so any character
//! (not only a literal period) is accepted there.

use regex::Regex;
use std::sync::LazyLock;

/// First `/edu` path in a line, greedy up to the last `jpg` on that line.
static PUZZLE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/edu.*.jpg").expect("puzzle path regex is valid"));

/// `-` followed by four characters, one more character, then `jpg`.
static SUFFIX_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(....).jpg").expect("suffix key regex is valid"));

/// Ordering key for a puzzle URL: every captured four-character suffix, left to right.
///
/// Most URLs yield exactly one suffix. A URL without any yields an empty key,
/// which orders before every non-empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey(Vec<String>);

impl SortKey {
    pub fn suffixes(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A log line that contained a puzzle path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleMatch {
    /// `host` + matched path.
    pub full_url: String,
    pub suffix_key: SortKey,
}

/// Match a single log line. Returns `None` when the line holds no puzzle path.
pub fn match_line(line: &str, host: &str) -> Option<PuzzleMatch> {
    let path = PUZZLE_PATH_RE.find(line)?;
    let full_url = format!("{}{}", host, path.as_str());
    let suffix_key = sort_key(&full_url);
    Some(PuzzleMatch {
        full_url,
        suffix_key,
    })
}

/// Collect all non-overlapping suffix captures of `url`.
pub fn sort_key(url: &str) -> SortKey {
    SortKey(
        SUFFIX_KEY_RE
            .captures_iter(url)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect(),
    )
}
