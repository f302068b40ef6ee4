// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/loader.rs
//
// Async image loading: local files and remote placeholders.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use image::{ImageReader, RgbaImage};

use super::cache::DiskCache;
use crate::constant::HTTP_TIMEOUT_SECS;
use crate::domain::{ImageSource, LoadError, LoadResult};

/// Cheap to clone; every load task gets its own copy.
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::Client,
    cache: Option<DiskCache>,
}

impl Loader {
    pub fn new(disk_cache: bool) -> LoadResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Tessera/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        let cache = if disk_cache { DiskCache::user() } else { None };

        Ok(Self { client, cache })
    }

    /// Load and decode one image to RGBA.
    pub async fn load(self, source: ImageSource) -> LoadResult<Arc<RgbaImage>> {
        match source {
            ImageSource::Local(path) => decode_file(path).await,
            ImageSource::Remote(url) => {
                let bytes = self.fetch(&url).await?;
                decode_bytes(bytes).await
            }
        }
    }

    /// Load several images concurrently, keeping their order.
    pub async fn load_all(
        self,
        sources: Vec<ImageSource>,
    ) -> Vec<(ImageSource, LoadResult<Arc<RgbaImage>>)> {
        let tasks = sources.into_iter().map(|source| {
            let loader = self.clone();
            async move {
                let result = loader.load(source.clone()).await;
                (source, result)
            }
        });
        join_all(tasks).await
    }

    async fn fetch(&self, url: &str) -> LoadResult<Vec<u8>> {
        if let Some(cache) = &self.cache
            && let Some(bytes) = cache.read(url).await
        {
            log::debug!("Cache hit for {url}");
            return Ok(bytes);
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await?.to_vec();

        if let Some(cache) = &self.cache
            && let Err(e) = cache.write(url, &bytes).await
        {
            log::warn!("Failed to cache {url} in {}: {e}", cache.dir().display());
        }

        Ok(bytes)
    }
}

async fn decode_file(path: PathBuf) -> LoadResult<Arc<RgbaImage>> {
    tokio::task::spawn_blocking(move || -> LoadResult<Arc<RgbaImage>> {
        let image = ImageReader::open(&path)?.with_guessed_format()?.decode()?;
        Ok(Arc::new(image.to_rgba8()))
    })
    .await?
}

async fn decode_bytes(bytes: Vec<u8>) -> LoadResult<Arc<RgbaImage>> {
    tokio::task::spawn_blocking(move || -> LoadResult<Arc<RgbaImage>> {
        let image = image::load_from_memory(&bytes)?;
        Ok(Arc::new(image.to_rgba8()))
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[tokio::test]
    async fn loads_local_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]))
            .save(&path)
            .unwrap();

        let loader = Loader::new(false).unwrap();
        let image = loader.load(ImageSource::Local(path)).await.unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgba([9, 8, 7, 255]));
    }

    #[tokio::test]
    async fn undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let loader = Loader::new(false).unwrap();
        let results = loader
            .load_all(vec![
                ImageSource::Local(path),
                ImageSource::Local(dir.path().join("missing.png")),
            ])
            .await;

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0].1, Err(LoadError::Decode(_))));
        assert!(matches!(results[1].1, Err(LoadError::Io(_))));
    }
}
