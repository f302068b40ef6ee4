// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/render.rs
//
// Detail rendering: crop result and the visible panel bitmap.

use std::sync::Arc;

use image::{RgbaImage, imageops};

use super::crop::{CropRegion, Cropper};

/// Crop result shown in a detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCrop {
    pub image: Arc<RgbaImage>,
    /// Region the image was cut from.
    pub region: CropRegion,
}

impl RenderedCrop {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Read the current crop of `cropper`.
///
/// `None` when the crop box is smaller than one pixel.
pub fn render_detail(cropper: &Cropper) -> Option<RenderedCrop> {
    cropper.cropped_image().map(|image| RenderedCrop {
        image: Arc::new(image),
        region: cropper.region(),
    })
}

/// Pixel size and offset of a panel canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewGeometry {
    pub size: (u32, u32),
    pub offset: (i64, i64),
}

impl ViewGeometry {
    /// Canvas of `width` x `height` showing the crop shifted by `pan`.
    ///
    /// Non-positive canvas sizes give `None`.
    pub fn new(width: f32, height: f32, pan: (f32, f32)) -> Option<Self> {
        if !(width >= 1.0 && height >= 1.0) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = (width.round() as u32, height.round() as u32);
        #[allow(clippy::cast_possible_truncation)]
        let offset = (pan.0.round() as i64, pan.1.round() as i64);
        Some(Self { size, offset })
    }
}

/// Visible part of a panel: `crop` at natural size, shifted by the pan
/// offset, clipped to the panel canvas.
pub fn compose(crop: &RgbaImage, geometry: ViewGeometry) -> RgbaImage {
    let (w, h) = geometry.size;
    let mut canvas = RgbaImage::new(w, h);
    imageops::replace(&mut canvas, crop, geometry.offset.0, geometry.offset.1);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crop::CropOptions;
    use image::Rgba;

    fn solid(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 10, 10, 255]))
    }

    #[test]
    fn render_is_idempotent() {
        let cropper = Cropper::new(Arc::new(solid(8, 6)), CropOptions::default());
        let first = render_detail(&cropper).unwrap();
        let second = render_detail(&cropper).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.dimensions(), (8, 6));
    }

    #[test]
    fn compose_translates_and_clips() {
        let geometry = ViewGeometry::new(6.0, 6.0, (3.0, -2.0)).unwrap();
        let view = compose(&solid(4, 4), geometry);
        assert_eq!(view.dimensions(), (6, 6));
        assert_eq!(view.get_pixel(2, 0)[3], 0);
        assert_eq!(view.get_pixel(3, 0)[3], 255);
        assert_eq!(view.get_pixel(5, 1)[3], 255);
        assert_eq!(view.get_pixel(3, 2)[3], 0);
    }

    #[test]
    fn sub_pixel_changes_keep_geometry() {
        let a = ViewGeometry::new(100.2, 50.0, (3.4, 0.0));
        let b = ViewGeometry::new(99.8, 50.1, (2.6, 0.0));
        assert_eq!(a, b);
        assert_ne!(a, ViewGeometry::new(100.0, 50.0, (4.0, 0.0)));
    }

    #[test]
    fn compose_of_collapsed_panel_is_empty() {
        assert!(ViewGeometry::new(0.0, 10.0, (0.0, 0.0)).is_none());
        assert!(ViewGeometry::new(10.0, -20.0, (0.0, 0.0)).is_none());
    }
}
