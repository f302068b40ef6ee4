// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling.

use cosmic::{Action, Task};

use super::message::{AppMessage, LoadOutcome};
use super::model::{AppModel, LoadedImage};
use super::TesseraApp;
use crate::domain::workspace::PointerOutcome;
use crate::domain::{ImageSource, LoadRequest, SeriesId};
use crate::fl;

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

impl UpdateResult {
    fn from_tasks(tasks: Vec<Task<Action<AppMessage>>>) -> Self {
        if tasks.is_empty() {
            Self::None
        } else {
            Self::Task(Task::batch(tasks))
        }
    }
}

pub fn update(app: &mut TesseraApp, message: &AppMessage) -> UpdateResult {
    let step = app.config.height_step;
    let nudge_step = app.config.nudge_step;
    let model = &mut app.model;

    match message {
        // ---- Series ---------------------------------------------------------
        AppMessage::AddSeries => {
            let request = model.workspace.add_series();
            log::info!(
                "Added series {} ({} open)",
                request.series,
                model.workspace.len()
            );
            return UpdateResult::from_tasks(start_series(model, request));
        }

        AppMessage::SelectThumbnail(series, index) => {
            let request = model.workspace.select_thumbnail(*series, *index);
            return selection_changed(model, *series, request);
        }

        AppMessage::NextImage(series) => {
            let request = model.workspace.next(*series);
            return selection_changed(model, *series, request);
        }

        AppMessage::PrevImage(series) => {
            let request = model.workspace.prev(*series);
            return selection_changed(model, *series, request);
        }

        // ---- Loading --------------------------------------------------------
        AppMessage::ImageLoaded { request, result } => match result {
            Ok(pixels) => {
                model
                    .images
                    .insert(request.source.clone(), LoadedImage::new(pixels.clone()));
                bind_image(model, request);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", request.source);
                if !model.workspace.is_current(request) {
                    return UpdateResult::None;
                }
                model.set_error(
                    request.series,
                    fl!("load-failed", source = request.source.label(), error = e.as_str()),
                );
            }
        },

        AppMessage::ThumbnailsLoaded { series, images } => {
            for (source, result) in images {
                match result {
                    Ok(pixels) => {
                        model
                            .images
                            .entry(source.clone())
                            .or_insert_with(|| LoadedImage::new(pixels.clone()));
                    }
                    Err(e) => log::warn!("Series {series}: thumbnail {source} failed: {e}"),
                }
            }
        }

        // ---- Crop -----------------------------------------------------------
        AppMessage::CropDragStart {
            series,
            x,
            y,
            handle,
        } => {
            model.workspace.crop_drag_start(*series, *handle, *x, *y);
        }

        AppMessage::CropDragMove { series, x, y } => {
            if model.workspace.crop_drag_move(*series, *x, *y) {
                model.refresh_view(*series);
            }
        }

        AppMessage::CropDragEnd(series) => {
            model.workspace.crop_drag_end(*series);
        }

        AppMessage::Nudge(direction) => {
            let rendered = model.workspace.nudge_all(*direction, nudge_step);
            if rendered.is_empty() {
                log::warn!("Nudge {direction:?}: no crop region is ready");
            }
            model.refresh_views(rendered);
        }

        // ---- Detail panels --------------------------------------------------
        AppMessage::IncreaseHeight(series) => {
            if model.workspace.change_height(*series, step) {
                model.refresh_view(*series);
            }
        }

        AppMessage::DecreaseHeight(series) => {
            if model.workspace.change_height(*series, -step) {
                model.refresh_view(*series);
            }
        }

        AppMessage::DetailZoom { series, lines } => {
            if model.workspace.zoom(*series, *lines) {
                model.refresh_view(*series);
            }
        }

        AppMessage::ResizeStart(series) => {
            model.workspace.resize_start(*series);
        }

        AppMessage::PanStart(series) => {
            model.workspace.pan_start(*series);
        }

        AppMessage::ReorderStart(series) => {
            model.workspace.reorder_start(*series);
        }

        AppMessage::PointerMoved { x, y } => match model.workspace.pointer_moved(*x, *y) {
            PointerOutcome::Resized(series) | PointerOutcome::Panned(series) => {
                model.refresh_view(series);
            }
            PointerOutcome::Reordered(_) | PointerOutcome::None => {}
        },

        AppMessage::PointerReleased => {
            if let Some(series) = model.workspace.pointer_released() {
                model.refresh_view(series);
            }
        }

        // ---- Errors ---------------------------------------------------------
        AppMessage::ClearError(series) => {
            model.clear_error(*series);
        }
    }

    UpdateResult::None
}

/// Tasks that bring a freshly added series to life: its thumbnails and its
/// main image.
pub fn start_series(model: &mut AppModel, request: LoadRequest) -> Vec<Task<Action<AppMessage>>> {
    let mut tasks = Vec::new();

    if let Some(series) = model.workspace.series(request.series) {
        let missing: Vec<ImageSource> = series
            .thumbnails()
            .iter()
            .filter(|source| !model.images.contains_key(source))
            .cloned()
            .collect();
        if let Some(task) = load_thumbnails(model, request.series, missing) {
            tasks.push(task);
        }
    }

    if let Some(task) = request_image(model, request) {
        tasks.push(task);
    }
    tasks
}

fn selection_changed(
    model: &mut AppModel,
    series: SeriesId,
    request: Option<LoadRequest>,
) -> UpdateResult {
    let Some(request) = request else {
        log::warn!("Series {series}: selection unchanged");
        return UpdateResult::None;
    };
    model.detail_views.remove(&series);
    model.clear_error(series);

    match request_image(model, request) {
        Some(task) => UpdateResult::Task(task),
        None => UpdateResult::None,
    }
}

/// Bind the image of `request`, loading it first when it is not in memory.
fn request_image(model: &mut AppModel, request: LoadRequest) -> Option<Task<Action<AppMessage>>> {
    if model.images.contains_key(&request.source) {
        bind_image(model, &request);
        return None;
    }

    let Some(loader) = model.loader.clone() else {
        model.set_error(request.series, fl!("loader-unavailable"));
        return None;
    };
    let source = request.source.clone();

    Some(Task::perform(loader.load(source), move |result| {
        let result: LoadOutcome = result.map_err(|e| e.to_string());
        Action::App(AppMessage::ImageLoaded {
            request: request.clone(),
            result,
        })
    }))
}

fn bind_image(model: &mut AppModel, request: &LoadRequest) {
    let Some(pixels) = model.image(&request.source).map(|image| image.pixels.clone()) else {
        return;
    };
    if model.workspace.image_loaded(request, pixels) {
        model.clear_error(request.series);
        model.refresh_view(request.series);
    }
}

fn load_thumbnails(
    model: &AppModel,
    series: SeriesId,
    sources: Vec<ImageSource>,
) -> Option<Task<Action<AppMessage>>> {
    if sources.is_empty() {
        return None;
    }
    let loader = model.loader.clone()?;

    Some(Task::perform(loader.load_all(sources), move |results| {
        let images = results
            .into_iter()
            .map(|(source, result)| (source, result.map_err(|e| e.to_string())))
            .collect();
        Action::App(AppMessage::ThumbnailsLoaded { series, images })
    }))
}
