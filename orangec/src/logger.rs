// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::LevelFilter;

pub(crate) struct Logger;

impl Logger {
    /// `RUST_LOG` takes precedence over the level derived from the command
    /// line and configuration.
    pub fn initialize(debug: bool) {
        let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };

        let result = env_logger::builder()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();

        if let Err(e) = result {
            eprintln!("failed to initialize logger: {e}");
            return;
        }

        log::debug!("Logger initialized at level {level}");
    }
}
