// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: logging, localisation, command line and the COSMIC runtime.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;

use std::path::PathBuf;

use clap::Parser;
use cosmic::iced::Limits;

use crate::app::{Flags, TesseraApp};

/// Compare cropped regions across several image series.
#[derive(Parser, Debug, Clone)]
#[command(name = "tessera", version, about)]
pub struct Args {
    /// Directory to open as a series. Repeat for more series. Without any,
    /// a placeholder series is created.
    #[arg(long = "series", value_name = "DIR")]
    pub series: Vec<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    log::info!("Starting Tessera {}", env!("CARGO_PKG_VERSION"));

    let settings = cosmic::app::Settings::default()
        .size_limits(Limits::NONE.min_width(640.0).min_height(480.0));

    cosmic::app::run::<TesseraApp>(settings, Flags::Args(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_flag_repeats() {
        let args = Args::try_parse_from(["tessera", "--series", "a", "--series", "b"]).unwrap();
        assert_eq!(args.series, [PathBuf::from("a"), PathBuf::from("b")]);

        assert!(Args::try_parse_from(["tessera", "a"]).is_err());
        assert!(Args::try_parse_from(["tessera"]).unwrap().series.is_empty());
    }
}
