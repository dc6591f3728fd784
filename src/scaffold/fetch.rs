//! Download of the template archive.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

/// Transport that can stream an archive URL into a local file.
pub trait ArchiveSource {
    /// Stream `url` into `dest`, returning the number of bytes written.
    fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Blocking HTTP transport backed by a `ureq` agent.
///
/// No timeout or retry is configured; redirects follow the client defaults.
pub struct HttpSource {
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::with_agent(ureq::Agent::new_with_defaults())
    }
}

impl ArchiveSource for HttpSource {
    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let response = self
            .agent
            .get(url)
            .call()
            .with_context(|| format!("requesting {url}"))?;
        let mut file = File::create(dest).with_context(|| format!("creating {}", dest.display()))?;
        let mut body = response.into_body().into_reader();
        io::copy(&mut body, &mut file).with_context(|| format!("writing {}", dest.display()))
    }
}

/// Destination of a download started at `timestamp` (unix seconds).
pub fn archive_path(temp_dir: &Path, timestamp: i64) -> PathBuf {
    temp_dir.join(format!("{timestamp}.zip"))
}

/// Download the template archive into `temp_dir` and return its path.
///
/// The file is left in place afterwards, and a failed download is not cleaned up.
pub fn fetch_template<S>(source: &S, url: &str, temp_dir: &Path) -> Result<PathBuf>
where
    S: ArchiveSource + ?Sized,
{
    let dest = archive_path(temp_dir, Utc::now().timestamp());
    let written = source.download(url, &dest)?;
    debug!(bytes = written, path = %dest.display(), "archive downloaded");
    Ok(dest)
}
