//! Blocking single-stream HTTP GET of one image.
//!
//! The downloader talks to the network only through [`Fetcher`], so tests can
//! substitute a recorder. [`CurlFetcher`] is the libcurl implementation.

use crate::config::LogpuzzleConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Error from a single image fetch. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, DNS, connection refused, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Writing the body to disk failed.
    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetch `url` and store the raw body at `dest`.
pub trait Fetcher {
    /// Returns the number of body bytes written.
    fn fetch_to(&mut self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

/// Knobs for [`CurlFetcher`]. Defaults leave libcurl's own behaviour alone.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl FetchOptions {
    pub fn from_config(cfg: &LogpuzzleConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    /// GET `url` following redirects and return the body.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(timeout) = self.options.connect_timeout {
            easy.connect_timeout(timeout)?;
        }
        if let Some(agent) = &self.options.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }
        Ok(body)
    }
}

impl Fetcher for CurlFetcher {
    fn fetch_to(&mut self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        // Nothing touches `dest` until the response is known to be good.
        let body = self.get(url)?;
        fs::write(dest, &body).map_err(|source| FetchError::Io {
            path: dest.to_path_buf(),
            source,
        })?;
        Ok(body.len() as u64)
    }
}
