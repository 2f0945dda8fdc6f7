//! Persistence sink: durable page writes into the mirror tree.
//!
//! Each page is written to a `.part` temp file and renamed into place, so a
//! destination path is either absent, a previous complete copy, or the new
//! complete copy. Parent directories are created on demand; rerunning a
//! crawl overwrites existing files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence port of the crawl engine. Production uses [`FsStore`]; tests
/// inject an in-memory fake.
pub trait PageStore: Send + Sync {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// Filesystem-backed store with atomic per-file writes.
#[derive(Debug, Default)]
pub struct FsStore;

impl PageStore for FsStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        let temp = temp_path(path);
        fs::write(&temp, bytes)
            .with_context(|| format!("failed to write temp file: {}", temp.display()))?;
        fs::rename(&temp, path)
            .with_context(|| format!("failed to rename {} to {}", temp.display(), path.display()))?;
        Ok(())
    }
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}
