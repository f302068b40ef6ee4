// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/header.rs
//
// Header bar: add-series button and global direction controls.

use cosmic::widget::{button, icon, tooltip};
use cosmic::Element;

use crate::app::AppMessage;
use crate::domain::Direction;
use crate::fl;

pub fn start<'a>() -> Vec<Element<'a, AppMessage>> {
    vec![
        button::suggested(fl!("add-series"))
            .on_press(AppMessage::AddSeries)
            .into(),
    ]
}

pub fn end<'a>() -> Vec<Element<'a, AppMessage>> {
    [
        (Direction::Left, "go-previous-symbolic", fl!("nudge-left")),
        (Direction::Up, "go-up-symbolic", fl!("nudge-up")),
        (Direction::Down, "go-down-symbolic", fl!("nudge-down")),
        (Direction::Right, "go-next-symbolic", fl!("nudge-right")),
    ]
    .into_iter()
    .map(|(direction, icon_name, label)| {
        tooltip(
            button::icon(icon::from_name(icon_name)).on_press(AppMessage::Nudge(direction)),
            text_label(label),
            tooltip::Position::Bottom,
        )
        .into()
    })
    .collect()
}

fn text_label<'a>(label: String) -> Element<'a, AppMessage> {
    cosmic::widget::text::body(label).into()
}
