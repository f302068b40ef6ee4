// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/interaction.rs
//
// Pointer interaction state of a detail panel.

/// Pointer session of one detail panel.
///
/// Every session starts from `Idle` on pointer-down and returns to `Idle`
/// on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Resize grip held. Size follows `start + (pointer - origin)`.
    Resizing {
        origin: (f32, f32),
        start: (f32, f32),
    },
    /// Rendered image held. Pan follows `start + (pointer - origin)`.
    Panning {
        origin: (f32, f32),
        start: (f32, f32),
    },
    /// Drag handle held. `grab_y` is the grabbed point in list coordinates
    /// when the session began.
    Reordering { origin_y: f32, grab_y: f32 },
}

/// Offset of `pointer` from `origin` added to `start`.
pub(crate) fn follow(start: (f32, f32), origin: (f32, f32), pointer: (f32, f32)) -> (f32, f32) {
    (
        start.0 + pointer.0 - origin.0,
        start.1 + pointer.1 - origin.1,
    )
}

/// Position a panel should take in the list.
///
/// `centers` are the current panel centres top to bottom; the result is the
/// number of centres above `pointer_y`.
pub fn drop_index(pointer_y: f32, centers: &[f32]) -> usize {
    centers
        .iter()
        .take_while(|&&center| pointer_y > center)
        .count()
}
