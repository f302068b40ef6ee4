// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop overlay widget drawn over the selected image of a series.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

mod overlay;

pub use overlay::crop_overlay;
