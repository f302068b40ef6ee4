// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

use crate::constant::{
    DEFAULT_DETAIL_SIZE, DEFAULT_HEIGHT_STEP, DEFAULT_NUDGE_STEP, DEFAULT_PREVIEW_HEIGHT,
    DEFAULT_THUMBNAIL_COUNT, DEFAULT_THUMBNAIL_WIDTH, DEFAULT_ZOOM_STEP, PLACEHOLDER_BASE_URL,
};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Thumbnails per generated placeholder series.
    pub thumbnail_count: usize,
    /// Base URL of the placeholder image service.
    pub placeholder_base_url: String,
    /// Crop region offset per direction button press.
    pub nudge_step: f32,
    /// Height change of the +/- buttons on a detail panel.
    pub height_step: f32,
    /// Size change per wheel line on a detail panel.
    pub zoom_step: f32,
    /// Initial detail canvas width.
    pub detail_width: f32,
    /// Initial detail canvas height.
    pub detail_height: f32,
    /// Height of the selected-image area.
    pub preview_height: f32,
    /// Width of one thumbnail in the strip.
    pub thumbnail_width: f32,
    /// Keep downloaded placeholder images on disk.
    pub disk_cache: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            thumbnail_count: DEFAULT_THUMBNAIL_COUNT,
            placeholder_base_url: PLACEHOLDER_BASE_URL.to_string(),
            nudge_step: DEFAULT_NUDGE_STEP,
            height_step: DEFAULT_HEIGHT_STEP,
            zoom_step: DEFAULT_ZOOM_STEP,
            detail_width: DEFAULT_DETAIL_SIZE.0,
            detail_height: DEFAULT_DETAIL_SIZE.1,
            preview_height: DEFAULT_PREVIEW_HEIGHT,
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            disk_cache: true,
        }
    }
}
