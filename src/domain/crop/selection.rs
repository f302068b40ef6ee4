// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/selection.rs
//
// Pointer selection state and drag handle types.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

use super::region::CropRegion;

/// Smallest edge a pointer resize may leave.
const MIN_SIZE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragHandle {
    /// Outside the crop box.
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Move,
}

/// What a drag that starts outside the crop box does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Draw a new box from the press point.
    Crop,
    /// Move the image under the box.
    #[default]
    Move,
    Ignore,
}

/// Crop box plus the state of an ongoing pointer drag.
#[derive(Debug, Clone, Default)]
pub struct CropSelection {
    pub region: CropRegion,
    pub is_dragging: bool,
    pub drag_handle: DragHandle,
    pub drag_start: Option<(f32, f32)>,
    pub drag_start_region: Option<CropRegion>,
}

impl CropSelection {
    pub fn new(region: CropRegion) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn start_drag(&mut self, handle: DragHandle, x: f32, y: f32) {
        self.is_dragging = true;
        self.drag_handle = handle;
        self.drag_start = Some((x, y));
        self.drag_start_region = Some(self.region);
    }

    /// Apply the pointer position. Returns `true` when the region changed.
    #[allow(clippy::too_many_arguments)]
    pub fn update_drag(
        &mut self,
        x: f32,
        y: f32,
        img_width: f32,
        img_height: f32,
        outside: DragMode,
        movable: bool,
        resizable: bool,
        aspect_ratio: Option<f32>,
    ) -> bool {
        if !self.is_dragging {
            return false;
        }
        let (Some((start_x, start_y)), Some(start)) = (self.drag_start, self.drag_start_region)
        else {
            return false;
        };
        let dx = x - start_x;
        let dy = y - start_y;

        let next = match self.drag_handle {
            DragHandle::None => match outside {
                DragMode::Crop => {
                    let min_x = start_x.min(x).max(0.0);
                    let min_y = start_y.min(y).max(0.0);
                    let max_x = start_x.max(x).min(img_width);
                    let max_y = start_y.max(y).min(img_height);
                    CropRegion::new(min_x, min_y, max_x - min_x, max_y - min_y)
                }
                // The image follows the pointer, so the box slides the other way.
                DragMode::Move => Self::moved(start, -dx, -dy, img_width, img_height),
                DragMode::Ignore => return false,
            },
            DragHandle::Move if movable => Self::moved(start, dx, dy, img_width, img_height),
            DragHandle::Move => return false,
            _ if resizable => {
                let resized = self.resize_region(start, dx, dy, img_width, img_height);
                Self::with_ratio(resized, aspect_ratio)
            }
            _ => return false,
        };

        let changed = next != self.region;
        self.region = next;
        changed
    }

    fn moved(start: CropRegion, dx: f32, dy: f32, img_width: f32, img_height: f32) -> CropRegion {
        let new_x = (start.x + dx).max(0.0).min(img_width - start.width);
        let new_y = (start.y + dy).max(0.0).min(img_height - start.height);
        CropRegion::new(new_x, new_y, start.width, start.height)
    }

    fn with_ratio(region: CropRegion, aspect_ratio: Option<f32>) -> CropRegion {
        match aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) {
            Some(ratio) => CropRegion::new(region.x, region.y, region.width, region.width / ratio),
            None => region,
        }
    }

    fn resize_region(
        &self,
        start: CropRegion,
        dx: f32,
        dy: f32,
        img_width: f32,
        img_height: f32,
    ) -> CropRegion {
        let CropRegion {
            x: rx,
            y: ry,
            width: rw,
            height: rh,
        } = start;
        let right = start.right();
        let bottom = start.bottom();

        let (x, y, w, h) = match self.drag_handle {
            DragHandle::TopLeft => {
                let new_rx = (rx + dx).max(0.0).min(right - MIN_SIZE);
                let new_ry = (ry + dy).max(0.0).min(bottom - MIN_SIZE);
                (new_rx, new_ry, right - new_rx, bottom - new_ry)
            }
            DragHandle::TopRight => {
                let new_right = (right + dx).max(rx + MIN_SIZE).min(img_width);
                let new_ry = (ry + dy).max(0.0).min(bottom - MIN_SIZE);
                (rx, new_ry, new_right - rx, bottom - new_ry)
            }
            DragHandle::BottomLeft => {
                let new_rx = (rx + dx).max(0.0).min(right - MIN_SIZE);
                let new_bottom = (bottom + dy).max(ry + MIN_SIZE).min(img_height);
                (new_rx, ry, right - new_rx, new_bottom - ry)
            }
            DragHandle::BottomRight => {
                let new_right = (right + dx).max(rx + MIN_SIZE).min(img_width);
                let new_bottom = (bottom + dy).max(ry + MIN_SIZE).min(img_height);
                (rx, ry, new_right - rx, new_bottom - ry)
            }
            DragHandle::Top => {
                let new_ry = (ry + dy).max(0.0).min(bottom - MIN_SIZE);
                (rx, new_ry, rw, bottom - new_ry)
            }
            DragHandle::Bottom => {
                let new_bottom = (bottom + dy).max(ry + MIN_SIZE).min(img_height);
                (rx, ry, rw, new_bottom - ry)
            }
            DragHandle::Left => {
                let new_rx = (rx + dx).max(0.0).min(right - MIN_SIZE);
                (new_rx, ry, right - new_rx, rh)
            }
            DragHandle::Right => {
                let new_right = (right + dx).max(rx + MIN_SIZE).min(img_width);
                (rx, ry, new_right - rx, rh)
            }
            DragHandle::None | DragHandle::Move => (rx, ry, rw, rh),
        };

        CropRegion::new(x, y, w.max(MIN_SIZE), h.max(MIN_SIZE))
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
        self.drag_handle = DragHandle::None;
        self.drag_start = None;
        self.drag_start_region = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(selection: &mut CropSelection, handle: DragHandle, from: (f32, f32), to: (f32, f32)) {
        selection.start_drag(handle, from.0, from.1);
        selection.update_drag(to.0, to.1, 100.0, 100.0, DragMode::Move, true, true, None);
        selection.end_drag();
    }

    #[test]
    fn move_handle_is_clamped_to_image() {
        let mut selection = CropSelection::new(CropRegion::new(10.0, 10.0, 50.0, 50.0));
        drag(&mut selection, DragHandle::Move, (20.0, 20.0), (200.0, 25.0));
        assert_eq!(selection.region, CropRegion::new(50.0, 15.0, 50.0, 50.0));
        assert!(!selection.is_dragging);
    }

    #[test]
    fn outside_drag_moves_image_under_box() {
        let mut selection = CropSelection::new(CropRegion::new(20.0, 20.0, 40.0, 40.0));
        drag(&mut selection, DragHandle::None, (90.0, 90.0), (80.0, 95.0));
        assert_eq!(selection.region, CropRegion::new(30.0, 15.0, 40.0, 40.0));
    }

    #[test]
    fn outside_drag_in_crop_mode_draws_new_box() {
        let mut selection = CropSelection::new(CropRegion::new(20.0, 20.0, 40.0, 40.0));
        selection.start_drag(DragHandle::None, 90.0, 10.0);
        assert!(selection.update_drag(70.0, 130.0, 100.0, 100.0, DragMode::Crop, true, true, None));
        assert_eq!(selection.region, CropRegion::new(70.0, 10.0, 20.0, 90.0));
    }

    #[test]
    fn outside_drag_in_ignore_mode_keeps_box() {
        let mut selection = CropSelection::new(CropRegion::new(20.0, 20.0, 40.0, 40.0));
        selection.start_drag(DragHandle::None, 90.0, 90.0);
        assert!(!selection.update_drag(10.0, 10.0, 100.0, 100.0, DragMode::Ignore, true, true, None));
        assert_eq!(selection.region, CropRegion::new(20.0, 20.0, 40.0, 40.0));
    }

    #[test]
    fn bottom_right_resize_respects_min_size() {
        let mut selection = CropSelection::new(CropRegion::new(10.0, 10.0, 20.0, 20.0));
        drag(&mut selection, DragHandle::BottomRight, (30.0, 30.0), (0.0, 0.0));
        assert_eq!(selection.region, CropRegion::new(10.0, 10.0, 1.0, 1.0));
    }

    #[test]
    fn locked_box_ignores_pointer() {
        let mut selection = CropSelection::new(CropRegion::new(10.0, 10.0, 20.0, 20.0));
        selection.start_drag(DragHandle::Right, 30.0, 20.0);
        let changed =
            selection.update_drag(60.0, 20.0, 100.0, 100.0, DragMode::Move, true, false, None);
        assert!(!changed);
        assert_eq!(selection.region.width, 20.0);
    }

    #[test]
    fn update_without_drag_is_noop() {
        let mut selection = CropSelection::new(CropRegion::new(0.0, 0.0, 10.0, 10.0));
        assert!(!selection.update_drag(5.0, 5.0, 100.0, 100.0, DragMode::Move, true, true, None));
    }
}
