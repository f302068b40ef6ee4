// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/series.rs
//
// Image series: thumbnails, main image and the marked selection.

use std::fmt;

use super::source::ImageSource;

/// Stable identifier of a series and its detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId(u32);

impl SeriesId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered thumbnails with one selected main image.
#[derive(Debug, Clone)]
pub struct Series {
    id: SeriesId,
    thumbnails: Vec<ImageSource>,
    main: ImageSource,
    /// Marked thumbnail; `None` until the user picks one.
    marked: Option<usize>,
}

impl Series {
    /// Create a series. `main` is shown until a thumbnail is selected.
    pub fn new(id: SeriesId, thumbnails: Vec<ImageSource>, main: ImageSource) -> Self {
        Self {
            id,
            thumbnails,
            main,
            marked: None,
        }
    }

    pub fn id(&self) -> SeriesId {
        self.id
    }

    pub fn thumbnails(&self) -> &[ImageSource] {
        &self.thumbnails
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    /// Source of the image currently bound to the cropper.
    pub fn main_source(&self) -> &ImageSource {
        &self.main
    }

    /// Index used for navigation (index 0 before any selection).
    pub fn current_index(&self) -> usize {
        self.marked.unwrap_or(0)
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked == Some(index)
    }

    /// Select thumbnail `index` and make it the main image.
    ///
    /// Returns the new main source, or `None` when `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<&ImageSource> {
        let source = self.thumbnails.get(index)?.clone();
        self.marked = Some(index);
        self.main = source;
        Some(&self.main)
    }

    pub fn next(&mut self) -> Option<&ImageSource> {
        if self.is_empty() {
            return None;
        }
        let index = (self.current_index() + 1) % self.len();
        self.select(index)
    }

    pub fn prev(&mut self) -> Option<&ImageSource> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        let index = (self.current_index() + len - 1) % len;
        self.select(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(count: usize) -> Series {
        let thumbs = (0..count)
            .map(|i| ImageSource::Remote(format!("thumb-{i}")))
            .collect();
        Series::new(SeriesId::new(1), thumbs, ImageSource::Remote("main".into()))
    }

    #[test]
    fn select_marks_exclusively() {
        let mut s = series(5);
        assert!((0..5).all(|i| !s.is_marked(i)));

        assert_eq!(s.select(2).cloned(), Some(ImageSource::Remote("thumb-2".into())));
        assert_eq!(s.main_source(), &ImageSource::Remote("thumb-2".into()));
        let marked: Vec<usize> = (0..5).filter(|&i| s.is_marked(i)).collect();
        assert_eq!(marked, [2]);

        s.select(4);
        let marked: Vec<usize> = (0..5).filter(|&i| s.is_marked(i)).collect();
        assert_eq!(marked, [4]);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut s = series(3);
        assert!(s.select(3).is_none());
        assert_eq!(s.main_source(), &ImageSource::Remote("main".into()));
        assert!(!s.is_marked(3));
    }

    #[test]
    fn prev_and_next_wrap() {
        let mut s = series(5);
        s.prev();
        assert_eq!(s.current_index(), 4);
        s.next();
        assert_eq!(s.current_index(), 0);
        s.next();
        s.next();
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.main_source(), &ImageSource::Remote("thumb-2".into()));
    }

    #[test]
    fn navigation_on_empty_series_is_noop() {
        let mut s = series(0);
        assert!(s.next().is_none());
        assert!(s.prev().is_none());
        assert_eq!(s.main_source(), &ImageSource::Remote("main".into()));
    }
}
