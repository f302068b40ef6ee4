// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/detail.rs
//
// Detail panel: drag handle with height buttons, pannable crop canvas and a
// resize grip.

use cosmic::iced::mouse::Interaction;
use cosmic::iced::{Alignment, Color, ContentFit, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::{button, column, container, image, row, text, Space};
use cosmic::Element;

use super::pointer::pointer_pad;
use crate::app::{AppMessage, AppModel};
use crate::constant::{DETAIL_HEADER_HEIGHT, RESIZE_GRIP_HEIGHT};
use crate::domain::panel::DetailPanel;
use crate::fl;

const GRIP_COLOR: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.35);

pub fn view<'a>(model: &'a AppModel, panel: &'a DetailPanel) -> Element<'a, AppMessage> {
    let id = panel.series();

    let handle = stack![
        container(text::heading(fl!("detail-title", number = id.get())))
            .height(Length::Fill)
            .align_y(Alignment::Center),
        pointer_pad()
            .interaction(Interaction::Grab)
            .on_press(AppMessage::ReorderStart(id)),
    ];

    let header = row()
        .spacing(4)
        .align_y(Alignment::Center)
        .height(Length::Fixed(DETAIL_HEADER_HEIGHT))
        .push(container(handle).width(Length::Fill).height(Length::Fill))
        .push(button::standard("-").on_press(AppMessage::DecreaseHeight(id)))
        .push(button::standard("+").on_press(AppMessage::IncreaseHeight(id)));

    // Collapsed panels keep their header and grip only.
    let width = panel.width.max(0.0);
    let height = panel.height.max(0.0);

    let content: Element<'a, AppMessage> = match model.detail_views.get(&id) {
        Some(view) => image(view.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::None)
            .into(),
        None => Space::new(Length::Fixed(width), Length::Fixed(height)).into(),
    };

    let canvas = container(stack![
        content,
        pointer_pad()
            .interaction(Interaction::Grab)
            .on_press(AppMessage::PanStart(id))
            .on_wheel(move |lines| AppMessage::DetailZoom { series: id, lines }),
    ])
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .clip(true);

    let grip = container(
        pointer_pad()
            .fill(GRIP_COLOR)
            .interaction(Interaction::ResizingDiagonallyDown)
            .on_press(AppMessage::ResizeStart(id)),
    )
    .width(Length::Fixed(width.max(DETAIL_HEADER_HEIGHT)))
    .height(Length::Fixed(RESIZE_GRIP_HEIGHT));

    column().push(header).push(canvas).push(grip).into()
}
