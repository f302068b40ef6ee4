// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::sync::Arc;

use image::RgbaImage;

use crate::domain::crop::DragHandle;
use crate::domain::{Direction, ImageSource, LoadRequest, SeriesId};

/// Decoded image or the error text of a failed load.
pub type LoadOutcome = Result<Arc<RgbaImage>, String>;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Series.
    AddSeries,
    SelectThumbnail(SeriesId, usize),
    NextImage(SeriesId),
    PrevImage(SeriesId),

    // Loading.
    ImageLoaded {
        request: LoadRequest,
        result: LoadOutcome,
    },
    ThumbnailsLoaded {
        series: SeriesId,
        images: Vec<(ImageSource, LoadOutcome)>,
    },

    // Crop operations.
    CropDragStart {
        series: SeriesId,
        x: f32,
        y: f32,
        handle: DragHandle,
    },
    CropDragMove {
        series: SeriesId,
        x: f32,
        y: f32,
    },
    CropDragEnd(SeriesId),

    // Global move.
    Nudge(Direction),

    // Detail panels.
    IncreaseHeight(SeriesId),
    DecreaseHeight(SeriesId),
    DetailZoom {
        series: SeriesId,
        lines: f32,
    },
    // Pointer sessions start at the last reported window position.
    ResizeStart(SeriesId),
    PanStart(SeriesId),
    ReorderStart(SeriesId),
    /// Window position of the pointer, reported continuously.
    PointerMoved {
        x: f32,
        y: f32,
    },
    PointerReleased,

    // Errors.
    ClearError(SeriesId),
}
