// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay widget with selection UI (shade, border, handles).
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
    },
};

use crate::app::AppMessage;
use crate::domain::SeriesId;
use crate::domain::crop::{CropRegion, CropSelection, DragHandle};

const HANDLE_SIZE: f32 = 10.0;
const HANDLE_HIT_SIZE: f32 = 24.0;
const OVERLAY_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
const HANDLE_COLOR: Color = Color::WHITE;
const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.6, 1.0);
const BORDER_WIDTH: f32 = 2.0;

pub struct CropOverlay {
    series: SeriesId,
    img_width: u32,
    img_height: u32,
    selection: CropSelection,
}

impl CropOverlay {
    pub fn new(series: SeriesId, img_width: u32, img_height: u32, selection: &CropSelection) -> Self {
        Self {
            series,
            img_width,
            img_height,
            selection: selection.clone(),
        }
    }

    /// Scale and top-left offset of the image fitted (contain) into `bounds`.
    fn fit(&self, bounds: &Rectangle) -> (f32, f32, f32) {
        let scale_x = bounds.width / self.img_width.max(1) as f32;
        let scale_y = bounds.height / self.img_height.max(1) as f32;
        let scale = scale_x.min(scale_y);

        let offset_x = (bounds.width - self.img_width as f32 * scale) / 2.0;
        let offset_y = (bounds.height - self.img_height as f32 * scale) / 2.0;
        (scale, offset_x, offset_y)
    }

    fn screen_to_image(&self, bounds: &Rectangle, point: Point) -> (f32, f32) {
        let (scale, offset_x, offset_y) = self.fit(bounds);
        (
            (point.x - bounds.x - offset_x) / scale,
            (point.y - bounds.y - offset_y) / scale,
        )
    }

    /// Cursor in image coordinates. The cursor shares the layout's
    /// coordinate space inside scrollables; raw event positions do not.
    fn cursor_to_image(&self, bounds: &Rectangle, cursor: Cursor) -> Option<(f32, f32)> {
        cursor
            .position()
            .map(|point| self.screen_to_image(bounds, point))
    }

    fn image_to_screen(&self, bounds: &Rectangle, img_x: f32, img_y: f32) -> Point {
        let (scale, offset_x, offset_y) = self.fit(bounds);
        Point::new(
            bounds.x + offset_x + img_x * scale,
            bounds.y + offset_y + img_y * scale,
        )
    }

    fn selection_rect(&self, bounds: &Rectangle) -> Rectangle {
        let CropRegion {
            x,
            y,
            width,
            height,
        } = self.selection.region;
        let top_left = self.image_to_screen(bounds, x, y);
        let bottom_right = self.image_to_screen(bounds, x + width, y + height);
        Rectangle::new(
            top_left,
            Size::new(bottom_right.x - top_left.x, bottom_right.y - top_left.y),
        )
    }

    fn handle_points(rect: &Rectangle) -> [(Point, DragHandle); 8] {
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        [
            (Point::new(x, y), DragHandle::TopLeft),
            (Point::new(x + w, y), DragHandle::TopRight),
            (Point::new(x, y + h), DragHandle::BottomLeft),
            (Point::new(x + w, y + h), DragHandle::BottomRight),
            (Point::new(x + w / 2.0, y), DragHandle::Top),
            (Point::new(x + w / 2.0, y + h), DragHandle::Bottom),
            (Point::new(x, y + h / 2.0), DragHandle::Left),
            (Point::new(x + w, y + h / 2.0), DragHandle::Right),
        ]
    }

    fn hit_test_handle(&self, bounds: &Rectangle, point: Point) -> DragHandle {
        let rect = self.selection_rect(bounds);

        for (center, handle) in Self::handle_points(&rect) {
            if Self::point_in_handle(point, center) {
                return handle;
            }
        }

        if rect.contains(point) {
            return DragHandle::Move;
        }

        DragHandle::None
    }

    fn point_in_handle(point: Point, handle_center: Point) -> bool {
        let half = HANDLE_HIT_SIZE / 2.0;
        point.x >= handle_center.x - half
            && point.x <= handle_center.x + half
            && point.y >= handle_center.y - half
            && point.y <= handle_center.y + half
    }

    fn cursor_for_handle(handle: DragHandle) -> mouse::Interaction {
        match handle {
            DragHandle::None => mouse::Interaction::Grab,
            DragHandle::TopLeft | DragHandle::BottomRight => {
                mouse::Interaction::ResizingDiagonallyDown
            }
            DragHandle::TopRight | DragHandle::BottomLeft => {
                mouse::Interaction::ResizingDiagonallyUp
            }
            DragHandle::Top | DragHandle::Bottom => mouse::Interaction::ResizingVertically,
            DragHandle::Left | DragHandle::Right => mouse::Interaction::ResizingHorizontally,
            DragHandle::Move => mouse::Interaction::Grabbing,
        }
    }

    fn fill(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
        if bounds.width > 0.0 && bounds.height > 0.0 {
            renderer.fill_quad(
                Quad {
                    bounds,
                    ..Quad::default()
                },
                color,
            );
        }
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for CropOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        // The box can leave the image after global moves; only its visible
        // part is drawn.
        let Some(sel) = self.selection_rect(&bounds).intersection(&bounds) else {
            Self::fill(renderer, bounds, OVERLAY_COLOR);
            return;
        };

        let bottom = bounds.y + bounds.height;
        let right = bounds.x + bounds.width;
        let sel_bottom = sel.y + sel.height;
        let sel_right = sel.x + sel.width;

        // Shade around the selection.
        Self::fill(
            renderer,
            Rectangle::new(bounds.position(), Size::new(bounds.width, sel.y - bounds.y)),
            OVERLAY_COLOR,
        );
        Self::fill(
            renderer,
            Rectangle::new(
                Point::new(bounds.x, sel_bottom),
                Size::new(bounds.width, bottom - sel_bottom),
            ),
            OVERLAY_COLOR,
        );
        Self::fill(
            renderer,
            Rectangle::new(
                Point::new(bounds.x, sel.y),
                Size::new(sel.x - bounds.x, sel.height),
            ),
            OVERLAY_COLOR,
        );
        Self::fill(
            renderer,
            Rectangle::new(
                Point::new(sel_right, sel.y),
                Size::new(right - sel_right, sel.height),
            ),
            OVERLAY_COLOR,
        );

        // Border.
        let edges = [
            Rectangle::new(sel.position(), Size::new(sel.width, BORDER_WIDTH)),
            Rectangle::new(
                Point::new(sel.x, sel_bottom - BORDER_WIDTH),
                Size::new(sel.width, BORDER_WIDTH),
            ),
            Rectangle::new(sel.position(), Size::new(BORDER_WIDTH, sel.height)),
            Rectangle::new(
                Point::new(sel_right - BORDER_WIDTH, sel.y),
                Size::new(BORDER_WIDTH, sel.height),
            ),
        ];
        for edge in edges {
            Self::fill(renderer, edge, BORDER_COLOR);
        }

        // Handles.
        let half = HANDLE_SIZE / 2.0;
        for (center, _) in Self::handle_points(&sel) {
            Self::fill(
                renderer,
                Rectangle::new(
                    Point::new(center.x - half, center.y - half),
                    Size::new(HANDLE_SIZE, HANDLE_SIZE),
                ),
                HANDLE_COLOR,
            );
        }
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(pos) = cursor.position_over(bounds) {
                    let handle = self.hit_test_handle(&bounds, pos);
                    let (x, y) = self.screen_to_image(&bounds, pos);

                    shell.publish(AppMessage::CropDragStart {
                        series: self.series,
                        x,
                        y,
                        handle,
                    });
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if self.selection.is_dragging
                    && let Some((x, y)) = self.cursor_to_image(&bounds, cursor)
                {
                    shell.publish(AppMessage::CropDragMove {
                        series: self.series,
                        x,
                        y,
                    });
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
                if self.selection.is_dragging {
                    shell.publish(AppMessage::CropDragEnd(self.series));
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();

        if self.selection.is_dragging {
            return Self::cursor_for_handle(self.selection.drag_handle);
        }

        if let Some(pos) = cursor.position_over(bounds) {
            return Self::cursor_for_handle(self.hit_test_handle(&bounds, pos));
        }

        mouse::Interaction::default()
    }
}

impl<'a> From<CropOverlay> for Element<'a, AppMessage> {
    fn from(overlay: CropOverlay) -> Self {
        Self::new(overlay)
    }
}

pub fn crop_overlay(
    series: SeriesId,
    img_width: u32,
    img_height: u32,
    selection: &CropSelection,
) -> CropOverlay {
    CropOverlay::new(series, img_width, img_height, selection)
}
