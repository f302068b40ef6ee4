// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/cropper.rs
//
// One crop widget instance bound to one decoded image.

use std::sync::Arc;

use image::{RgbaImage, imageops};

use super::region::CropRegion;
use super::selection::{CropSelection, DragHandle, DragMode};

/// Construction options of a [`Cropper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Behaviour of drags that start outside the crop box.
    pub drag_mode: DragMode,
    /// Width / height ratio; `None` is free.
    pub aspect_ratio: Option<f32>,
    /// Initial crop box area as a fraction of the image (0..=1).
    pub auto_crop_area: f32,
    pub crop_box_movable: bool,
    pub crop_box_resizable: bool,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            drag_mode: DragMode::Move,
            aspect_ratio: None,
            auto_crop_area: 1.0,
            crop_box_movable: true,
            crop_box_resizable: true,
        }
    }
}

/// Crop widget bound to one image.
///
/// A new instance is built every time the selected image changes; the
/// previous one is simply dropped.
#[derive(Debug, Clone)]
pub struct Cropper {
    image: Arc<RgbaImage>,
    options: CropOptions,
    selection: CropSelection,
}

impl Cropper {
    pub fn new(image: Arc<RgbaImage>, options: CropOptions) -> Self {
        let (w, h) = image.dimensions();
        let region =
            CropRegion::centered(w as f32, h as f32, options.auto_crop_area, options.aspect_ratio);

        Self {
            image,
            options,
            selection: CropSelection::new(region),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn region(&self) -> CropRegion {
        self.selection.region
    }

    pub fn selection(&self) -> &CropSelection {
        &self.selection
    }

    /// Shift the crop region by exactly (dx, dy) image pixels.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.selection.region = self.selection.region.translated(dx, dy);
    }

    pub fn begin_drag(&mut self, handle: DragHandle, x: f32, y: f32) {
        self.selection.start_drag(handle, x, y);
    }

    /// Pointer edits stay inside the image. Returns `true` when the crop
    /// region changed.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        let (w, h) = self.dimensions();
        self.selection.update_drag(
            x,
            y,
            w as f32,
            h as f32,
            self.options.drag_mode,
            self.options.crop_box_movable,
            self.options.crop_box_resizable,
            self.options.aspect_ratio,
        )
    }

    pub fn end_drag(&mut self) {
        self.selection.end_drag();
    }

    /// Current crop as an image; area outside the source stays transparent.
    pub fn cropped_image(&self) -> Option<RgbaImage> {
        let (x, y, w, h) = self.region().to_pixel_rect()?;
        let mut out = RgbaImage::new(w, h);
        imageops::replace(&mut out, self.image.as_ref(), -x, -y);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(w: u32, h: u32) -> Arc<RgbaImage> {
        Arc::new(RgbaImage::from_fn(w, h, |x, y| {
            Rgba([x as u8, y as u8, 0, 255])
        }))
    }

    #[test]
    fn default_crop_covers_whole_image() {
        let cropper = Cropper::new(gradient(40, 30), CropOptions::default());
        assert_eq!(cropper.region(), CropRegion::new(0.0, 0.0, 40.0, 30.0));

        let crop = cropper.cropped_image().unwrap();
        assert_eq!(crop.dimensions(), (40, 30));
        assert_eq!(crop.get_pixel(39, 29), &Rgba([39, 29, 0, 255]));
    }

    #[test]
    fn move_by_is_exact_and_unclamped() {
        let mut cropper = Cropper::new(gradient(40, 30), CropOptions::default());
        cropper.move_by(10.0, 0.0);
        cropper.move_by(0.0, -5.0);
        assert_eq!(cropper.region(), CropRegion::new(10.0, -5.0, 40.0, 30.0));
    }

    #[test]
    fn crop_outside_image_is_transparent() {
        let mut cropper = Cropper::new(gradient(40, 30), CropOptions::default());
        cropper.move_by(10.0, 0.0);

        let crop = cropper.cropped_image().unwrap();
        assert_eq!(crop.dimensions(), (40, 30));
        assert_eq!(crop.get_pixel(0, 0), &Rgba([10, 0, 0, 255]));
        assert_eq!(crop.get_pixel(29, 0), &Rgba([39, 0, 0, 255]));
        assert_eq!(crop.get_pixel(30, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn pointer_drag_respects_image_bounds() {
        let options = CropOptions {
            auto_crop_area: 0.5,
            ..CropOptions::default()
        };
        let mut cropper = Cropper::new(gradient(40, 40), options);
        assert_eq!(cropper.region(), CropRegion::new(10.0, 10.0, 20.0, 20.0));

        cropper.begin_drag(DragHandle::Move, 15.0, 15.0);
        assert!(cropper.selection().is_dragging);
        assert!(cropper.drag_to(100.0, 15.0));
        cropper.end_drag();

        assert_eq!(cropper.region(), CropRegion::new(20.0, 10.0, 20.0, 20.0));
        assert!(!cropper.selection().is_dragging);
    }
}
