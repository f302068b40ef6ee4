// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::collections::HashMap;
use std::sync::Arc;

use cosmic::widget::image::Handle as ImageHandle;
use image::RgbaImage;

use super::loader::Loader;
use crate::config::AppConfig;
use crate::domain::crop::CropOptions;
use crate::domain::render::{ViewGeometry, compose};
use crate::domain::source::Placeholders;
use crate::domain::{ImageSource, SeriesId, Workspace, WorkspaceSettings};

/// Create an iced image handle from decoded pixels.
pub fn create_image_handle(img: &RgbaImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    ImageHandle::from_rgba(w, h, img.as_raw().clone())
}

/// Decoded image kept for reuse across selections.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub pixels: Arc<RgbaImage>,
    pub handle: ImageHandle,
}

impl LoadedImage {
    pub fn new(pixels: Arc<RgbaImage>) -> Self {
        let handle = create_image_handle(&pixels);
        Self { pixels, handle }
    }
}

/// Visible bitmap of a detail panel and what it was composed from.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub handle: ImageHandle,
    crop: Arc<RgbaImage>,
    geometry: ViewGeometry,
}

impl DetailView {
    fn shows(&self, crop: &Arc<RgbaImage>, geometry: ViewGeometry) -> bool {
        Arc::ptr_eq(&self.crop, crop) && self.geometry == geometry
    }
}

pub struct AppModel {
    pub workspace: Workspace,
    pub loader: Option<Loader>,

    // Decoded images by source (thumbnails and main images).
    pub images: HashMap<ImageSource, LoadedImage>,

    // Visible bitmap of each detail panel.
    pub detail_views: HashMap<SeriesId, DetailView>,

    // Last load error per series.
    pub errors: HashMap<SeriesId, String>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        let settings = WorkspaceSettings {
            thumbnail_count: config.thumbnail_count,
            detail_size: (config.detail_width, config.detail_height),
            zoom_step: config.zoom_step,
            crop_options: CropOptions::default(),
            placeholders: Placeholders::new(config.placeholder_base_url.as_str()),
        };

        let loader = match Loader::new(config.disk_cache) {
            Ok(loader) => Some(loader),
            Err(e) => {
                log::error!("Failed to initialise image loader: {e}");
                None
            }
        };

        Self {
            workspace: Workspace::new(settings),
            loader,
            images: HashMap::new(),
            detail_views: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, series: SeriesId, msg: S) {
        self.errors.insert(series, msg.into());
    }

    pub fn clear_error(&mut self, series: SeriesId) {
        self.errors.remove(&series);
    }

    pub fn image(&self, source: &ImageSource) -> Option<&LoadedImage> {
        self.images.get(source)
    }

    /// Rebuild the visible bitmap of a panel from its rendered crop,
    /// size and pan offset. Unchanged views keep their handle.
    pub fn refresh_view(&mut self, series: SeriesId) {
        let source = self.workspace.panel(series).and_then(|panel| {
            let rendered = panel.rendered.as_ref()?;
            let geometry = ViewGeometry::new(panel.width, panel.height, panel.pan)?;
            Some((rendered.image.clone(), geometry))
        });

        let Some((crop, geometry)) = source else {
            self.detail_views.remove(&series);
            return;
        };
        if self
            .detail_views
            .get(&series)
            .is_some_and(|view| view.shows(&crop, geometry))
        {
            return;
        }

        let handle = create_image_handle(&compose(&crop, geometry));
        self.detail_views.insert(
            series,
            DetailView {
                handle,
                crop,
                geometry,
            },
        );
    }

    pub fn refresh_views(&mut self, series: impl IntoIterator<Item = SeriesId>) {
        for id in series {
            self.refresh_view(id);
        }
    }
}
