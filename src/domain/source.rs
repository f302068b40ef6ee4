// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/source.rs
//
// Image sources: remote placeholder URLs and local files.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageFormat;

use crate::constant::{PLACEHOLDER_MAIN_SIZE, PLACEHOLDER_SEED_STRIDE, PLACEHOLDER_THUMB_SIZE};
use crate::domain::series::SeriesId;

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    /// Short human readable label (URL or file name).
    pub fn label(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Builds placeholder URLs for generated series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    base_url: String,
}

impl Placeholders {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn seed(id: SeriesId, index: usize) -> u64 {
        u64::from(id.get()) * u64::from(PLACEHOLDER_SEED_STRIDE) + index as u64
    }

    /// Thumbnail `index` of series `id`.
    pub fn thumbnail(&self, id: SeriesId, index: usize) -> ImageSource {
        let (w, h) = PLACEHOLDER_THUMB_SIZE;
        ImageSource::Remote(format!(
            "{}/{w}/{h}?random={}",
            self.base_url,
            Self::seed(id, index)
        ))
    }

    /// Large main image shown before the user picks a thumbnail.
    pub fn main(&self, id: SeriesId) -> ImageSource {
        let (w, h) = PLACEHOLDER_MAIN_SIZE;
        ImageSource::Remote(format!(
            "{}/{w}/{h}?random={}",
            self.base_url,
            Self::seed(id, 0)
        ))
    }
}

/// Check whether the image crate knows the file extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(ImageFormat::from_extension)
        .is_some_and(|format| format.reading_enabled())
}

/// List the image files of a directory, sorted by file name.
pub fn scan_directory(dir: &Path) -> anyhow::Result<Vec<ImageSource>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files.into_iter().map(ImageSource::Local).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_urls_follow_series_seed() {
        let placeholders = Placeholders::new("https://picsum.photos/");
        let id = SeriesId::new(2);

        assert_eq!(
            placeholders.thumbnail(id, 3),
            ImageSource::Remote("https://picsum.photos/200/300?random=23".into())
        );
        assert_eq!(
            placeholders.main(id),
            ImageSource::Remote("https://picsum.photos/800/600?random=20".into())
        );
    }

    #[test]
    fn scan_directory_keeps_sorted_images_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.webp"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let labels: Vec<String> = scan_directory(dir.path())
            .unwrap()
            .iter()
            .map(ImageSource::label)
            .collect();

        assert_eq!(labels, ["a.jpg", "b.png", "c.webp"]);
    }

    #[test]
    fn scan_directory_reports_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_directory(&dir.path().join("missing")).is_err());
    }
}
