// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/series.rs
//
// Series panel: title, thumbnail strip, selected image with crop overlay
// and prev/next navigation.

use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::iced_widget::stack;
use cosmic::widget::{button, column, container, image, row, text};
use cosmic::Element;

use super::crop::crop_overlay;
use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;
use crate::domain::series::Series;
use crate::fl;

pub fn view<'a>(
    model: &'a AppModel,
    config: &'a AppConfig,
    series: &'a Series,
) -> Element<'a, AppMessage> {
    let id = series.id();

    let thumbnails = series
        .thumbnails()
        .iter()
        .enumerate()
        .fold(row().spacing(8), |strip, (index, source)| {
            let content: Element<'a, AppMessage> = match model.image(source) {
                Some(loaded) => image(loaded.handle.clone())
                    .width(Length::Fixed(config.thumbnail_width))
                    .content_fit(ContentFit::Contain)
                    .into(),
                None => container(text::caption(fl!("loading")))
                    .width(Length::Fixed(config.thumbnail_width))
                    .center_x(Length::Fixed(config.thumbnail_width))
                    .into(),
            };

            strip.push(
                button::custom(content)
                    .class(cosmic::theme::Button::Image)
                    .selected(series.is_marked(index))
                    .padding(2)
                    .on_press(AppMessage::SelectThumbnail(id, index)),
            )
        });

    let preview: Element<'a, AppMessage> =
        match (model.image(series.main_source()), model.workspace.cropper(id)) {
            (Some(loaded), Some(cropper)) => {
                let (width, height) = cropper.dimensions();
                let picture = image(loaded.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain);
                let overlay = crop_overlay(id, width, height, cropper.selection());

                stack![picture, overlay].into()
            }
            _ => container(text::body(fl!("loading")))
                .center(Length::Fill)
                .into(),
        };

    let preview = container(preview)
        .width(Length::Fill)
        .height(Length::Fixed(config.preview_height));

    let navigation = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(button::standard("<").on_press(AppMessage::PrevImage(id)))
        .push(button::standard(">").on_press(AppMessage::NextImage(id)))
        .push(text::caption(series.main_source().label()));

    let mut panel = column()
        .spacing(8)
        .push(text::title4(fl!("series-title", number = id.get())))
        .push(thumbnails)
        .push(preview)
        .push(navigation);

    if let Some(error) = model.errors.get(&id) {
        panel = panel.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::body(error.as_str()))
                .push(button::text(fl!("dismiss")).on_press(AppMessage::ClearError(id))),
        );
    }

    panel.into()
}
