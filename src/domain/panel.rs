// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/panel.rs
//
// Detail panel: canvas size, pan offset and rendered crop.

use super::interaction::{Interaction, follow};
use super::render::RenderedCrop;
use super::series::SeriesId;

/// What a pointer move changed on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelChange {
    None,
    Resized,
    Panned,
}

/// Reorderable, resizable container rendering the crop of one series.
///
/// Sizes and pan offsets are never clamped; a panel can collapse to zero or
/// negative size.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    series: SeriesId,
    pub width: f32,
    pub height: f32,
    pub pan: (f32, f32),
    pub rendered: Option<RenderedCrop>,
    pub interaction: Interaction,
}

impl DetailPanel {
    pub fn new(series: SeriesId, width: f32, height: f32) -> Self {
        Self {
            series,
            width,
            height,
            pan: (0.0, 0.0),
            rendered: None,
            interaction: Interaction::Idle,
        }
    }

    pub fn series(&self) -> SeriesId {
        self.series
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn resize_by(&mut self, dw: f32, dh: f32) {
        self.width += dw;
        self.height += dh;
    }

    /// +/- buttons.
    pub fn change_height(&mut self, delta: f32) {
        self.height += delta;
    }

    /// Wheel zoom: `lines` wheel steps (positive grows) of `step` pixels.
    pub fn zoom(&mut self, lines: f32, step: f32) {
        let delta = lines * step;
        self.resize_by(delta, delta);
    }

    pub fn begin_resize(&mut self, x: f32, y: f32) {
        self.interaction = Interaction::Resizing {
            origin: (x, y),
            start: self.size(),
        };
    }

    pub fn begin_pan(&mut self, x: f32, y: f32) {
        self.interaction = Interaction::Panning {
            origin: (x, y),
            start: self.pan,
        };
    }

    pub fn begin_reorder(&mut self, y: f32, grab_y: f32) {
        self.interaction = Interaction::Reordering { origin_y: y, grab_y };
    }

    /// Apply a pointer move to the active resize or pan session.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> PanelChange {
        match self.interaction {
            Interaction::Resizing { origin, start } => {
                (self.width, self.height) = follow(start, origin, (x, y));
                PanelChange::Resized
            }
            Interaction::Panning { origin, start } => {
                self.pan = follow(start, origin, (x, y));
                PanelChange::Panned
            }
            Interaction::Idle | Interaction::Reordering { .. } => PanelChange::None,
        }
    }

    /// End any session. Panning snaps the image back to its origin.
    pub fn end_pointer(&mut self) -> PanelChange {
        let previous = std::mem::take(&mut self.interaction);
        if matches!(previous, Interaction::Panning { .. }) {
            self.pan = (0.0, 0.0);
            return PanelChange::Panned;
        }
        PanelChange::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> DetailPanel {
        DetailPanel::new(SeriesId::new(1), 300.0, 200.0)
    }

    #[test]
    fn resize_session_follows_pointer_without_clamping() {
        let mut p = panel();
        p.begin_resize(500.0, 500.0);
        assert_eq!(p.pointer_moved(520.0, 530.0), PanelChange::Resized);
        assert_eq!(p.size(), (320.0, 230.0));

        assert_eq!(p.pointer_moved(0.0, 0.0), PanelChange::Resized);
        assert_eq!(p.size(), (-200.0, -300.0));

        assert_eq!(p.end_pointer(), PanelChange::None);
        assert_eq!(p.interaction, Interaction::Idle);
        assert_eq!(p.pointer_moved(10.0, 10.0), PanelChange::None);
    }

    #[test]
    fn buttons_and_wheel_use_exact_deltas() {
        let mut p = panel();
        p.change_height(20.0);
        p.change_height(-20.0);
        p.change_height(-20.0);
        assert_eq!(p.size(), (300.0, 180.0));

        p.zoom(1.0, 20.0);
        assert_eq!(p.size(), (320.0, 200.0));
        p.zoom(-20.0, 20.0);
        assert_eq!(p.size(), (-80.0, -200.0));
    }

    #[test]
    fn pan_resets_on_release() {
        let mut p = panel();
        p.begin_pan(10.0, 10.0);
        p.pointer_moved(-990.0, 60.0);
        assert_eq!(p.pan, (-1000.0, 50.0));

        assert_eq!(p.end_pointer(), PanelChange::Panned);
        assert_eq!(p.pan, (0.0, 0.0));
    }
}
