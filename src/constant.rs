// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Placeholder image service used for generated series.
pub const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos";

/// Placeholder thumbnail size in pixels (width, height).
pub const PLACEHOLDER_THUMB_SIZE: (u32, u32) = (200, 300);

/// Placeholder main image size in pixels (width, height).
pub const PLACEHOLDER_MAIN_SIZE: (u32, u32) = (800, 600);

/// Seed stride between series (series N uses seeds N*10 .. N*10+count).
pub const PLACEHOLDER_SEED_STRIDE: u32 = 10;

/// Number of thumbnails in a generated series.
pub const DEFAULT_THUMBNAIL_COUNT: usize = 5;

/// Crop region offset per global nudge, in image pixels.
pub const DEFAULT_NUDGE_STEP: f32 = 10.0;

/// Height change of the detail panel +/- buttons, in pixels.
pub const DEFAULT_HEIGHT_STEP: f32 = 20.0;

/// Size change per wheel line on a detail panel, in pixels.
pub const DEFAULT_ZOOM_STEP: f32 = 20.0;

/// Initial detail panel canvas size (width, height).
pub const DEFAULT_DETAIL_SIZE: (f32, f32) = (480.0, 320.0);

/// Height of the selected-image area in the series column.
pub const DEFAULT_PREVIEW_HEIGHT: f32 = 360.0;

/// Width of one thumbnail in the strip.
pub const DEFAULT_THUMBNAIL_WIDTH: f32 = 72.0;

/// Height of the detail panel header (drag handle row).
pub const DETAIL_HEADER_HEIGHT: f32 = 36.0;

/// Height of the resize grip under each detail canvas.
pub const RESIZE_GRIP_HEIGHT: f32 = 10.0;

/// Vertical spacing between detail panels.
pub const DETAIL_SPACING: f32 = 12.0;

/// Pixels per wheel "line" when the platform reports pixel deltas.
pub const WHEEL_PIXELS_PER_LINE: f32 = 40.0;

/// Download cache directory name.
pub const CACHE_DIR: &str = "tessera";

/// Download cache file extension.
pub const CACHE_EXT: &str = "img";

/// HTTP timeout for placeholder downloads, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 20;
