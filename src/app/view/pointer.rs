// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/pointer.rs
//
// Transparent hit area that reports pointer presses and wheel steps.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor, ScrollDelta},
    },
};

use crate::constant::WHEEL_PIXELS_PER_LINE;

/// Hit area for drag handles, resize grips and panning surfaces.
///
/// Only the press is reported here. Its position is in the coordinates of
/// the enclosing scrollable, so sessions take their origin from the
/// application-wide pointer subscription, which also delivers the moves and
/// the release.
pub struct PointerPad<'a, Message> {
    on_press: Option<Message>,
    on_wheel: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    interaction: mouse::Interaction,
    fill: Option<Color>,
}

impl<'a, Message> PointerPad<'a, Message> {
    pub fn new() -> Self {
        Self {
            on_press: None,
            on_wheel: None,
            interaction: mouse::Interaction::default(),
            fill: None,
        }
    }

    /// Left press inside the pad.
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Wheel over the pad, in lines (positive is away from the user).
    pub fn on_wheel(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_wheel = Some(Box::new(f));
        self
    }

    pub fn interaction(mut self, interaction: mouse::Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

fn wheel_lines(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / WHEEL_PIXELS_PER_LINE,
    }
}

impl<Message: Clone> Widget<Message, cosmic::Theme, Renderer> for PointerPad<'_, Message> {
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
        if let Some(color) = self.fill {
            renderer.fill_quad(
                Quad {
                    bounds: layout.bounds(),
                    ..Quad::default()
                },
                color,
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
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if let Some(message) = &self.on_press
                    && cursor.is_over(bounds)
                {
                    shell.publish(message.clone());
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if let Some(on_wheel) = &self.on_wheel
                    && cursor.is_over(bounds)
                {
                    shell.publish(on_wheel(wheel_lines(delta)));
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
        if cursor.is_over(layout.bounds()) {
            self.interaction
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: Clone + 'a> From<PointerPad<'a, Message>> for Element<'a, Message> {
    fn from(pad: PointerPad<'a, Message>) -> Self {
        Self::new(pad)
    }
}

pub fn pointer_pad<'a, Message>() -> PointerPad<'a, Message> {
    PointerPad::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_wheel_deltas_are_converted_to_lines() {
        assert_eq!(wheel_lines(ScrollDelta::Lines { x: 0.0, y: -2.0 }), -2.0);
        assert_eq!(
            wheel_lines(ScrollDelta::Pixels {
                x: 0.0,
                y: WHEEL_PIXELS_PER_LINE * 3.0
            }),
            3.0
        );
    }
}
