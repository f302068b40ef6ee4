// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/region.rs
//
// Crop region domain model.

/// Crop region in image pixel coordinates.
///
/// The region may extend past the image edges after programmatic moves;
/// pixels outside the image render transparent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering `area` (0..=1) of an image, centred.
    pub fn centered(img_width: f32, img_height: f32, area: f32, aspect_ratio: Option<f32>) -> Self {
        let area = area.clamp(0.0, 1.0);
        let (mut width, mut height) = (img_width * area, img_height * area);

        if let Some(ratio) = aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) {
            if width / height > ratio {
                width = height * ratio;
            } else {
                height = width / ratio;
            }
        }

        Self::new(
            (img_width - width) / 2.0,
            (img_height - height) / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if region has a renderable size.
    pub fn is_valid(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }

    /// Whole-pixel rectangle: signed origin, unsigned size.
    pub fn to_pixel_rect(&self) -> Option<(i64, i64, u32, u32)> {
        if !self.is_valid() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some((
            self.x.round() as i64,
            self.y.round() as i64,
            self.width.round() as u32,
            self.height.round() as u32,
        ))
    }
}
