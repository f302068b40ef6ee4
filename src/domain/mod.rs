// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// UI-independent model: series, croppers, detail panels and their controller.

pub mod crop;
pub mod error;
pub mod interaction;
pub mod panel;
pub mod render;
pub mod series;
pub mod source;
pub mod workspace;

pub use error::{LoadError, LoadResult};
pub use series::SeriesId;
pub use source::ImageSource;
pub use workspace::{Direction, LoadRequest, PointerOutcome, Workspace, WorkspaceSettings};
