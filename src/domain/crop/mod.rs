// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Crop widget model: region geometry, pointer selection and the cropper.
// Selection handling inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

mod cropper;
mod region;
mod selection;

pub use cropper::{CropOptions, Cropper};
pub use region::CropRegion;
pub use selection::{CropSelection, DragHandle, DragMode};
