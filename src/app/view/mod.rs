// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View root: series column on the left, detail panels on the right.

pub mod crop;
pub mod detail;
pub mod header;
pub mod pointer;
pub mod series;

use cosmic::iced::Length;
use cosmic::widget::{column, container, row, scrollable, text};
use cosmic::Element;

use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;
use crate::constant::DETAIL_SPACING;
use crate::fl;

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    if model.workspace.is_empty() {
        return container(text::body(fl!("no-series")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    }

    let series_column = model
        .workspace
        .series_iter()
        .fold(column().spacing(24).padding(16), |col, s| {
            col.push(series::view(model, config, s))
        });

    let detail_column = model
        .workspace
        .panels_in_order()
        .fold(column().spacing(DETAIL_SPACING).padding(16), |col, panel| {
            col.push(detail::view(model, panel))
        });

    row()
        .push(
            scrollable(series_column)
                .width(Length::FillPortion(3))
                .height(Length::Fill),
        )
        .push(
            scrollable(detail_column)
                .width(Length::FillPortion(2))
                .height(Length::Fill),
        )
        .into()
}
