// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/workspace.rs
//
// Workspace controller: series, croppers and detail panels keyed by id.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use image::RgbaImage;

use super::crop::{CropOptions, Cropper, DragHandle};
use super::interaction::{Interaction, drop_index};
use super::panel::{DetailPanel, PanelChange};
use super::render::render_detail;
use super::series::{Series, SeriesId};
use super::source::{ImageSource, Placeholders};
use crate::constant::{DETAIL_HEADER_HEIGHT, DETAIL_SPACING, RESIZE_GRIP_HEIGHT};

/// Global nudge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Offset of one nudge of `step` pixels.
    pub fn offset(self, step: f32) -> (f32, f32) {
        match self {
            Self::Up => (0.0, -step),
            Self::Down => (0.0, step),
            Self::Left => (-step, 0.0),
            Self::Right => (step, 0.0),
        }
    }
}

/// Request to decode an image and bind it to a series.
///
/// `generation` identifies the selection that asked for it; a newer
/// selection makes the request stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub series: SeriesId,
    pub generation: u64,
    pub source: ImageSource,
}

/// Result of a pointer move on the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No session active, or nothing changed.
    None,
    /// Panel size changed (detail re-rendered).
    Resized(SeriesId),
    /// Pan offset changed.
    Panned(SeriesId),
    /// Panel moved in the list.
    Reordered(SeriesId),
}

#[derive(Debug, Clone)]
pub struct WorkspaceSettings {
    pub thumbnail_count: usize,
    pub detail_size: (f32, f32),
    /// Size change per wheel line.
    pub zoom_step: f32,
    pub crop_options: CropOptions,
    pub placeholders: Placeholders,
}

#[derive(Debug)]
struct SeriesSlot {
    series: Series,
    cropper: Option<Cropper>,
    generation: u64,
}

/// Single owner of every series, cropper and detail panel.
///
/// Panels are associated with their series through [`SeriesId`] only;
/// reordering permutes `order` and nothing else.
#[derive(Debug)]
pub struct Workspace {
    settings: WorkspaceSettings,
    last_id: u32,
    slots: BTreeMap<SeriesId, SeriesSlot>,
    panels: HashMap<SeriesId, DetailPanel>,
    order: Vec<SeriesId>,
    /// Panel owning the current pointer session.
    active: Option<SeriesId>,
    /// Last pointer position in window coordinates.
    cursor: (f32, f32),
}

impl Workspace {
    pub fn new(settings: WorkspaceSettings) -> Self {
        Self {
            settings,
            last_id: 0,
            slots: BTreeMap::new(),
            panels: HashMap::new(),
            order: Vec::new(),
            active: None,
            cursor: (0.0, 0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // =========================================================================
    // Series
    // =========================================================================

    /// Add a series of placeholder images and its detail panel.
    pub fn add_series(&mut self) -> LoadRequest {
        let id = self.allocate_id();
        let placeholders = &self.settings.placeholders;
        let thumbnails = (0..self.settings.thumbnail_count)
            .map(|i| placeholders.thumbnail(id, i))
            .collect();
        let main = placeholders.main(id);

        self.insert_series(Series::new(id, thumbnails, main))
    }

    /// Add a series of local images. `None` when `sources` is empty.
    pub fn add_local_series(&mut self, sources: Vec<ImageSource>) -> Option<LoadRequest> {
        let main = sources.first()?.clone();
        let id = self.allocate_id();
        Some(self.insert_series(Series::new(id, sources, main)))
    }

    fn allocate_id(&mut self) -> SeriesId {
        self.last_id += 1;
        SeriesId::new(self.last_id)
    }

    fn insert_series(&mut self, series: Series) -> LoadRequest {
        let id = series.id();
        let source = series.main_source().clone();
        let (width, height) = self.settings.detail_size;

        self.slots.insert(
            id,
            SeriesSlot {
                series,
                cropper: None,
                generation: 0,
            },
        );
        self.panels.insert(id, DetailPanel::new(id, width, height));
        self.order.push(id);
        log::debug!("Series {id} added");

        LoadRequest {
            series: id,
            generation: 0,
            source,
        }
    }

    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.slots.get(&id).map(|slot| &slot.series)
    }

    /// Series in creation order.
    pub fn series_iter(&self) -> impl Iterator<Item = &Series> {
        self.slots.values().map(|slot| &slot.series)
    }

    pub fn cropper(&self, id: SeriesId) -> Option<&Cropper> {
        self.slots.get(&id)?.cropper.as_ref()
    }

    /// Mark thumbnail `index` and request its image.
    pub fn select_thumbnail(&mut self, id: SeriesId, index: usize) -> Option<LoadRequest> {
        self.change_selection(id, |series| series.select(index).cloned())
    }

    pub fn next(&mut self, id: SeriesId) -> Option<LoadRequest> {
        self.change_selection(id, |series| series.next().cloned())
    }

    pub fn prev(&mut self, id: SeriesId) -> Option<LoadRequest> {
        self.change_selection(id, |series| series.prev().cloned())
    }

    fn change_selection(
        &mut self,
        id: SeriesId,
        change: impl FnOnce(&mut Series) -> Option<ImageSource>,
    ) -> Option<LoadRequest> {
        let slot = self.slots.get_mut(&id)?;
        let source = change(&mut slot.series)?;

        if slot.cropper.take().is_some() {
            log::debug!("Series {id}: cropper destroyed");
        }
        slot.generation += 1;
        let generation = slot.generation;

        if let Some(panel) = self.panels.get_mut(&id) {
            panel.rendered = None;
        }

        Some(LoadRequest {
            series: id,
            generation,
            source,
        })
    }

    /// Whether `request` still matches the selection of its series.
    pub fn is_current(&self, request: &LoadRequest) -> bool {
        self.slots
            .get(&request.series)
            .is_some_and(|slot| slot.generation == request.generation)
    }

    /// Bind a decoded image to its series.
    ///
    /// Stale requests are ignored and return `false`. Otherwise a fresh
    /// cropper is built and the detail view rendered.
    pub fn image_loaded(&mut self, request: &LoadRequest, image: Arc<RgbaImage>) -> bool {
        let Some(slot) = self.slots.get_mut(&request.series) else {
            return false;
        };
        if slot.generation != request.generation {
            log::debug!(
                "Series {}: dropping stale image {}",
                request.series,
                request.source
            );
            return false;
        }

        slot.cropper = Some(Cropper::new(image, self.settings.crop_options));
        log::debug!("Series {}: cropper ready", request.series);
        self.render(request.series)
    }

    // =========================================================================
    // Crop interaction
    // =========================================================================

    pub fn crop_drag_start(&mut self, id: SeriesId, handle: DragHandle, x: f32, y: f32) {
        if let Some(cropper) = self.cropper_mut(id) {
            cropper.begin_drag(handle, x, y);
        }
    }

    /// Returns `true` when the region changed and the panel was re-rendered.
    pub fn crop_drag_move(&mut self, id: SeriesId, x: f32, y: f32) -> bool {
        let changed = self
            .cropper_mut(id)
            .is_some_and(|cropper| cropper.drag_to(x, y));
        changed && self.render(id)
    }

    pub fn crop_drag_end(&mut self, id: SeriesId) {
        if let Some(cropper) = self.cropper_mut(id) {
            cropper.end_drag();
        }
    }

    fn cropper_mut(&mut self, id: SeriesId) -> Option<&mut Cropper> {
        self.slots.get_mut(&id)?.cropper.as_mut()
    }

    /// Move every live crop region by one step, then re-render every panel.
    pub fn nudge_all(&mut self, direction: Direction, step: f32) -> Vec<SeriesId> {
        let (dx, dy) = direction.offset(step);
        for slot in self.slots.values_mut() {
            if let Some(cropper) = slot.cropper.as_mut() {
                cropper.move_by(dx, dy);
            }
        }

        let ids: Vec<SeriesId> = self.order.clone();
        ids.into_iter().filter(|&id| self.render(id)).collect()
    }

    // =========================================================================
    // Detail panels
    // =========================================================================

    /// Render the current crop of `id` into its panel.
    ///
    /// Returns `true` when the panel shows the current crop. A crop whose
    /// region did not change is kept as is.
    pub fn render(&mut self, id: SeriesId) -> bool {
        let Some(cropper) = self.slots.get(&id).and_then(|slot| slot.cropper.as_ref()) else {
            return false;
        };
        let Some(panel) = self.panels.get_mut(&id) else {
            return false;
        };
        let region = cropper.region();
        if panel.rendered.as_ref().is_none_or(|r| r.region != region) {
            panel.rendered = render_detail(cropper);
        }
        true
    }

    pub fn panel(&self, id: SeriesId) -> Option<&DetailPanel> {
        self.panels.get(&id)
    }

    pub fn panel_order(&self) -> &[SeriesId] {
        &self.order
    }

    /// Panels top to bottom.
    pub fn panels_in_order(&self) -> impl Iterator<Item = &DetailPanel> {
        self.order.iter().filter_map(|id| self.panels.get(id))
    }

    pub fn change_height(&mut self, id: SeriesId, delta: f32) -> bool {
        let Some(panel) = self.panels.get_mut(&id) else {
            return false;
        };
        panel.change_height(delta);
        self.render(id);
        true
    }

    pub fn zoom(&mut self, id: SeriesId, lines: f32) -> bool {
        let step = self.settings.zoom_step;
        let Some(panel) = self.panels.get_mut(&id) else {
            return false;
        };
        panel.zoom(lines, step);
        self.render(id);
        true
    }

    // Sessions start at the last pointer position so that press and moves
    // share the window coordinate space.

    pub fn resize_start(&mut self, id: SeriesId) {
        let (x, y) = self.cursor;
        if let Some(panel) = self.claim_pointer(id) {
            panel.begin_resize(x, y);
        }
    }

    pub fn pan_start(&mut self, id: SeriesId) {
        let (x, y) = self.cursor;
        if let Some(panel) = self.claim_pointer(id) {
            panel.begin_pan(x, y);
        }
    }

    pub fn reorder_start(&mut self, id: SeriesId) {
        let Some(index) = self.order.iter().position(|&other| other == id) else {
            return;
        };
        let grab_y = self.panel_top(index) + DETAIL_HEADER_HEIGHT / 2.0;
        let y = self.cursor.1;
        if let Some(panel) = self.claim_pointer(id) {
            panel.begin_reorder(y, grab_y);
        }
    }

    /// End the pointer session of any other panel and hand it to `id`.
    fn claim_pointer(&mut self, id: SeriesId) -> Option<&mut DetailPanel> {
        if !self.panels.contains_key(&id) {
            return None;
        }
        if let Some(previous) = self.active.replace(id)
            && previous != id
            && let Some(panel) = self.panels.get_mut(&previous)
        {
            panel.end_pointer();
        }
        self.panels.get_mut(&id)
    }

    /// Record the window position of the pointer and route it to the
    /// active session.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> PointerOutcome {
        self.cursor = (x, y);
        let Some(id) = self.active else {
            return PointerOutcome::None;
        };
        let Some(panel) = self.panels.get_mut(&id) else {
            return PointerOutcome::None;
        };

        if let Interaction::Reordering { origin_y, grab_y } = panel.interaction {
            let target = grab_y + (y - origin_y);
            return if self.reorder_to(id, target) {
                PointerOutcome::Reordered(id)
            } else {
                PointerOutcome::None
            };
        }

        match panel.pointer_moved(x, y) {
            PanelChange::Resized => {
                self.render(id);
                PointerOutcome::Resized(id)
            }
            PanelChange::Panned => PointerOutcome::Panned(id),
            PanelChange::None => PointerOutcome::None,
        }
    }

    /// End the active session. Returns the panel whose view changed.
    pub fn pointer_released(&mut self) -> Option<SeriesId> {
        let id = self.active.take()?;
        let panel = self.panels.get_mut(&id)?;
        (panel.end_pointer() != PanelChange::None).then_some(id)
    }

    /// Move the dragged panel so that it sits where `pointer_y` falls.
    fn reorder_to(&mut self, id: SeriesId, pointer_y: f32) -> bool {
        let Some(current) = self.order.iter().position(|&other| other == id) else {
            return false;
        };
        let centers = self.panel_centers();
        let insert_before = drop_index(pointer_y, &centers);
        let target = if insert_before > current {
            insert_before - 1
        } else {
            insert_before
        };
        self.move_panel(id, target)
    }

    /// Move panel `id` to position `index` (clamped to the list).
    pub fn move_panel(&mut self, id: SeriesId, index: usize) -> bool {
        let Some(current) = self.order.iter().position(|&other| other == id) else {
            return false;
        };
        let index = index.min(self.order.len() - 1);
        if index == current {
            return false;
        }
        let moved = self.order.remove(current);
        self.order.insert(index, moved);
        log::debug!("Panel {id} moved from {current} to {index}");
        true
    }

    fn panel_extent(panel: &DetailPanel) -> f32 {
        DETAIL_HEADER_HEIGHT + panel.height.max(0.0) + RESIZE_GRIP_HEIGHT
    }

    fn panel_top(&self, index: usize) -> f32 {
        self.order[..index]
            .iter()
            .filter_map(|id| self.panels.get(id))
            .map(|panel| Self::panel_extent(panel) + DETAIL_SPACING)
            .sum()
    }

    /// Vertical centres of the panels in list coordinates, top to bottom.
    pub fn panel_centers(&self) -> Vec<f32> {
        let mut top = 0.0;
        self.panels_in_order()
            .map(|panel| {
                let extent = Self::panel_extent(panel);
                let center = top + extent / 2.0;
                top += extent + DETAIL_SPACING;
                center
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn settings() -> WorkspaceSettings {
        WorkspaceSettings {
            thumbnail_count: 5,
            detail_size: (300.0, 200.0),
            zoom_step: 20.0,
            crop_options: CropOptions::default(),
            placeholders: Placeholders::new("https://picsum.photos"),
        }
    }

    fn image(w: u32, h: u32) -> Arc<RgbaImage> {
        Arc::new(RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255])))
    }

    /// Workspace with `count` series, each with a loaded 100x80 image.
    fn loaded(count: usize) -> Workspace {
        let mut ws = Workspace::new(settings());
        for _ in 0..count {
            let request = ws.add_series();
            assert!(ws.image_loaded(&request, image(100, 80)));
        }
        ws
    }

    #[test]
    fn adding_series_creates_matching_panels() {
        let mut ws = Workspace::new(settings());
        let ids: Vec<SeriesId> = (0..4).map(|_| ws.add_series().series).collect();

        assert_eq!(ws.len(), 4);
        assert_eq!(ws.panel_order(), ids.as_slice());
        for id in &ids {
            assert_eq!(ws.series(*id).map(Series::id), Some(*id));
            assert_eq!(ws.panel(*id).map(DetailPanel::series), Some(*id));
            assert_eq!(ws.series(*id).map(Series::len), Some(5));
        }
        assert_eq!(ids[0], SeriesId::new(1));
        assert_eq!(ids[3], SeriesId::new(4));
    }

    #[test]
    fn first_request_loads_placeholder_main_image() {
        let mut ws = Workspace::new(settings());
        let request = ws.add_series();
        assert_eq!(
            request.source,
            ImageSource::Remote("https://picsum.photos/800/600?random=10".into())
        );
        assert!(ws.cropper(request.series).is_none());
        assert!(ws.panel(request.series).unwrap().rendered.is_none());
    }

    #[test]
    fn loaded_image_builds_cropper_and_renders() {
        let ws = loaded(1);
        let id = SeriesId::new(1);
        assert!(ws.cropper(id).is_some());
        let rendered = ws.panel(id).unwrap().rendered.as_ref().unwrap();
        assert_eq!(rendered.dimensions(), (100, 80));
    }

    #[test]
    fn selection_change_destroys_cropper_and_ignores_stale_loads() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);
        let stale = ws.select_thumbnail(id, 1).unwrap();
        assert!(ws.cropper(id).is_none());
        assert!(ws.panel(id).unwrap().rendered.is_none());

        let fresh = ws.next(id).unwrap();
        assert_eq!(
            fresh.source,
            ImageSource::Remote("https://picsum.photos/200/300?random=12".into())
        );

        assert!(!ws.image_loaded(&stale, image(10, 10)));
        assert!(ws.cropper(id).is_none());

        assert!(ws.image_loaded(&fresh, image(20, 30)));
        assert_eq!(ws.cropper(id).map(Cropper::dimensions), Some((20, 30)));
    }

    #[test]
    fn out_of_range_selection_keeps_cropper() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);
        assert!(ws.select_thumbnail(id, 9).is_none());
        assert!(ws.cropper(id).is_some());
        assert!(ws.select_thumbnail(SeriesId::new(7), 0).is_none());
    }

    #[test]
    fn nudge_moves_every_region_and_renders_each_panel() {
        let mut ws = loaded(3);
        let before: Vec<_> = ws
            .panel_order()
            .iter()
            .map(|id| ws.cropper(*id).unwrap().region())
            .collect();

        let rendered = ws.nudge_all(Direction::Left, 10.0);
        assert_eq!(rendered, ws.panel_order());

        for (id, old) in ws.panel_order().iter().zip(before) {
            let region = ws.cropper(*id).unwrap().region();
            assert_eq!(region.x, old.x - 10.0);
            assert_eq!(region.y, old.y);
        }

        ws.nudge_all(Direction::Down, 10.0);
        let region = ws.cropper(SeriesId::new(2)).unwrap().region();
        assert_eq!((region.x, region.y), (-10.0, 10.0));
    }

    #[test]
    fn nudge_skips_series_without_image() {
        let mut ws = loaded(1);
        ws.add_series();
        assert_eq!(ws.nudge_all(Direction::Up, 10.0), [SeriesId::new(1)]);
    }

    #[test]
    fn reordering_keeps_cropper_mapping() {
        let mut ws = Workspace::new(settings());
        let mut sizes = HashMap::new();
        for (i, w) in [10u32, 20, 30].into_iter().enumerate() {
            let request = ws.add_series();
            ws.image_loaded(&request, image(w, w));
            sizes.insert(request.series, (w, w));
            assert_eq!(request.series, SeriesId::new(i as u32 + 1));
        }

        assert!(ws.move_panel(SeriesId::new(3), 0));
        assert!(ws.move_panel(SeriesId::new(1), 5));
        assert_eq!(
            ws.panel_order(),
            [SeriesId::new(3), SeriesId::new(2), SeriesId::new(1)]
        );

        for id in ws.panel_order() {
            assert_eq!(ws.cropper(*id).map(Cropper::dimensions), sizes.get(id).copied());
            assert_eq!(ws.panel(*id).map(DetailPanel::series), Some(*id));
        }
        assert!(!ws.move_panel(SeriesId::new(3), 0));
    }

    #[test]
    fn drag_handle_reorders_by_panel_centres() {
        let mut ws = loaded(3);
        // Each panel spans header + 200 + grip; centres are one extent apart.
        let extent = DETAIL_HEADER_HEIGHT + 200.0 + RESIZE_GRIP_HEIGHT + DETAIL_SPACING;
        let centers = ws.panel_centers();
        assert_eq!(centers.len(), 3);
        assert!((centers[1] - centers[0] - extent).abs() < 1e-3);

        ws.pointer_moved(0.0, 100.0);
        ws.reorder_start(SeriesId::new(1));
        assert_eq!(ws.pointer_moved(0.0, 100.0 + extent / 2.0), PointerOutcome::None);
        assert_eq!(
            ws.pointer_moved(0.0, 100.0 + extent * 1.5),
            PointerOutcome::Reordered(SeriesId::new(1))
        );
        assert_eq!(
            ws.panel_order(),
            [SeriesId::new(2), SeriesId::new(1), SeriesId::new(3)]
        );

        assert_eq!(ws.pointer_released(), None);
        assert_eq!(ws.pointer_moved(0.0, 0.0), PointerOutcome::None);
    }

    #[test]
    fn resize_and_zoom_apply_exact_deltas() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);

        assert_eq!(ws.pointer_moved(50.0, 50.0), PointerOutcome::None);
        ws.resize_start(id);
        assert_eq!(ws.pointer_moved(30.0, 75.0), PointerOutcome::Resized(id));
        assert_eq!(ws.panel(id).unwrap().size(), (280.0, 225.0));
        ws.pointer_released();

        ws.change_height(id, -20.0);
        assert_eq!(ws.panel(id).unwrap().size(), (280.0, 205.0));

        assert!(ws.zoom(id, -2.0));
        assert_eq!(ws.panel(id).unwrap().size(), (240.0, 165.0));
        assert!(!ws.zoom(SeriesId::new(9), 1.0));
    }

    #[test]
    fn only_one_pointer_session_at_a_time() {
        let mut ws = loaded(2);
        let (a, b) = (SeriesId::new(1), SeriesId::new(2));

        ws.pan_start(a);
        assert_eq!(ws.pointer_moved(5.0, 5.0), PointerOutcome::Panned(a));
        ws.resize_start(b);

        let panel_a = ws.panel(a).unwrap();
        assert_eq!(panel_a.interaction, Interaction::Idle);
        assert_eq!(panel_a.pan, (0.0, 0.0));

        assert_eq!(ws.pointer_moved(10.0, 10.0), PointerOutcome::Resized(b));
        assert_eq!(ws.panel(a).unwrap().size(), (300.0, 200.0));
        assert_eq!(ws.panel(b).unwrap().size(), (305.0, 205.0));
        assert_eq!(ws.pointer_released(), None);
    }

    #[test]
    fn pan_release_reports_reset() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);
        ws.pointer_moved(10.0, 10.0);
        ws.pan_start(id);
        ws.pointer_moved(40.0, 0.0);
        assert_eq!(ws.panel(id).unwrap().pan, (30.0, -10.0));
        assert_eq!(ws.pointer_released(), Some(id));
        assert_eq!(ws.panel(id).unwrap().pan, (0.0, 0.0));
    }

    #[test]
    fn session_starts_where_the_pointer_is() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);

        // The press itself carries no position; the origin is the last
        // window position, so a press without motion changes nothing.
        ws.pointer_moved(120.0, 400.0);
        ws.resize_start(id);
        assert_eq!(ws.pointer_moved(120.0, 400.0), PointerOutcome::Resized(id));
        assert_eq!(ws.panel(id).unwrap().size(), (300.0, 200.0));

        ws.pointer_moved(120.0, 401.0);
        assert_eq!(ws.panel(id).unwrap().size(), (300.0, 201.0));
    }

    #[test]
    fn failed_stale_request_is_not_current() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);
        let slow = ws.select_thumbnail(id, 1).unwrap();
        assert!(ws.is_current(&slow));

        let fast = ws.select_thumbnail(id, 2).unwrap();
        assert!(ws.image_loaded(&fast, image(50, 40)));
        assert!(!ws.is_current(&slow));
        assert!(ws.is_current(&fast));
    }

    #[test]
    fn crop_drag_rerenders_panel() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);

        ws.crop_drag_start(id, DragHandle::BottomRight, 100.0, 80.0);
        assert!(ws.crop_drag_move(id, 60.0, 50.0));
        ws.crop_drag_end(id);

        let rendered = ws.panel(id).unwrap().rendered.as_ref().unwrap();
        assert_eq!(rendered.dimensions(), (60, 50));
        assert!(!ws.crop_drag_move(id, 10.0, 10.0));
    }

    #[test]
    fn unchanged_region_keeps_rendered_crop() {
        let mut ws = loaded(1);
        let id = SeriesId::new(1);
        let before = ws.panel(id).unwrap().rendered.clone().unwrap();

        assert!(ws.change_height(id, 40.0));
        let after = ws.panel(id).unwrap().rendered.as_ref().unwrap();
        assert!(Arc::ptr_eq(&before.image, &after.image));

        ws.nudge_all(Direction::Right, 10.0);
        let moved = ws.panel(id).unwrap().rendered.as_ref().unwrap();
        assert!(!Arc::ptr_eq(&before.image, &moved.image));
    }

    #[test]
    fn local_series_starts_on_first_file() {
        let mut ws = Workspace::new(settings());
        assert!(ws.add_local_series(Vec::new()).is_none());

        let sources = vec![
            ImageSource::Local("a.png".into()),
            ImageSource::Local("b.png".into()),
        ];
        let request = ws.add_local_series(sources).unwrap();
        assert_eq!(request.series, SeriesId::new(1));
        assert_eq!(request.source, ImageSource::Local("a.png".into()));
        assert_eq!(ws.series(request.series).map(Series::len), Some(2));
    }
}
