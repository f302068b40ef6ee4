// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/cache.rs
//
// On-disk cache for downloaded placeholder images.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::constant::{CACHE_DIR, CACHE_EXT};

/// Raw downloads keyed by the SHA-256 of their URL.
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    /// Cache under the user cache directory, if the platform has one.
    pub fn user() -> Option<Self> {
        dirs::cache_dir().map(|dir| Self::at(dir.join(CACHE_DIR)))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        let mut name = String::with_capacity(digest.len() * 2 + CACHE_EXT.len() + 1);
        for byte in digest {
            let _ = write!(name, "{byte:02x}");
        }
        name.push('.');
        name.push_str(CACHE_EXT);
        self.dir.join(name)
    }

    pub async fn read(&self, url: &str) -> Option<Vec<u8>> {
        tokio::fs::read(self.path_for(url)).await.ok()
    }

    pub async fn write(&self, url: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(url), bytes).await
    }
}
