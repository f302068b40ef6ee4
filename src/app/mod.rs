// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod cache;
pub mod loader;
pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::event::{self, Event};
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::mouse::{self, Button};
use cosmic::iced::{Subscription, window};
use cosmic::{Action, Element, Task};

use crate::Args;
use crate::config::AppConfig;
use crate::domain::Direction;
use crate::domain::source::scan_directory;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct TesseraApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
}

impl cosmic::Application for TesseraApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "io.github.tessera.Tessera";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let config = match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
            Ok(handler) => AppConfig::get_entry(&handler).unwrap_or_else(|(errors, config)| {
                for e in errors {
                    log::warn!("Config entry ignored: {e}");
                }
                config
            }),
            Err(e) => {
                log::warn!("Using default config: {e}");
                AppConfig::default()
            }
        };

        let Flags::Args(args) = flags;
        let mut model = AppModel::new(&config);
        let mut tasks = Vec::new();

        // One series per directory given on the command line.
        for dir in &args.series {
            match scan_directory(dir) {
                Ok(sources) => match model.workspace.add_local_series(sources) {
                    Some(request) => {
                        log::info!("Series {} from {}", request.series, dir.display());
                        tasks.extend(update::start_series(&mut model, request));
                    }
                    None => log::warn!("No images in {}", dir.display()),
                },
                Err(e) => log::error!("{e:#}"),
            }
        }

        // Start with one placeholder series otherwise.
        if model.workspace.is_empty() {
            tasks.push(Task::done(Action::App(AppMessage::AddSeries)));
        }

        (
            Self {
                core,
                model,
                config,
            },
            Task::batch(tasks),
        )
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        None
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match update::update(self, &message) {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        }
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        view::header::start()
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        view::header::end()
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model, &self.config)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            keyboard::on_key_press(handle_key_press),
            event::listen_with(pointer_event),
        ])
    }
}

/// Window-wide pointer tracking. Detail panel sessions start from and follow
/// these positions.
fn pointer_event(event: Event, _status: event::Status, _id: window::Id) -> Option<AppMessage> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(AppMessage::PointerMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) => {
            Some(AppMessage::PointerReleased)
        }
        _ => None,
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Global move of every crop region.
        Key::Named(Named::ArrowUp) => Some(AppMessage::Nudge(Direction::Up)),
        Key::Named(Named::ArrowDown) => Some(AppMessage::Nudge(Direction::Down)),
        Key::Named(Named::ArrowLeft) => Some(AppMessage::Nudge(Direction::Left)),
        Key::Named(Named::ArrowRight) => Some(AppMessage::Nudge(Direction::Right)),

        Key::Character(ch) if ch.eq_ignore_ascii_case("n") => Some(AppMessage::AddSeries),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_nudge_and_n_adds_series() {
        let none = Modifiers::empty();
        assert!(matches!(
            handle_key_press(Key::Named(Named::ArrowLeft), none),
            Some(AppMessage::Nudge(Direction::Left))
        ));
        assert!(matches!(
            handle_key_press(Key::Character("N".into()), none),
            Some(AppMessage::AddSeries)
        ));
        assert!(handle_key_press(Key::Named(Named::ArrowUp), Modifiers::CTRL).is_none());
    }
}
