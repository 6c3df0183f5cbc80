use std::fs;
use std::path::Path;

use crate::core::{parse_grid_size, GridSize, Mode, Settings};
use crate::shared::constants;
use crate::utils::logger;

/// Values found in the config file; anything missing or invalid is `None`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub grid_size: Option<GridSize>,
    pub mode: Option<Mode>,
}

pub fn read_config(path: &Path) -> FileConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(_) => FileConfig::default(),
    }
}

pub fn parse_config(content: &str) -> FileConfig {
    let mut config = FileConfig::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        if key == constants::CONFIG_KEY_GRID_SIZE {
            match parse_grid_size(value) {
                Ok(request) => config.grid_size = Some(request.size()),
                Err(err) => logger::error(&format!(
                    "{}: ignoring {} = {}: {}",
                    constants::CONFIG_FILE,
                    key,
                    value,
                    err
                )),
            }
        } else if key == constants::CONFIG_KEY_MODE {
            match value.parse::<Mode>() {
                Ok(mode) => config.mode = Some(mode),
                Err(err) => logger::error(&format!(
                    "{}: ignoring {}: {}",
                    constants::CONFIG_FILE,
                    key,
                    err
                )),
            }
        }
    }

    config
}

/// CLI flag, then config file, then built-in default.
pub fn resolve_settings(cli_size: Option<GridSize>, cli_mode: Option<Mode>, file: &FileConfig) -> Settings {
    let defaults = Settings::default();
    Settings {
        size: cli_size.or(file.grid_size).unwrap_or(defaults.size),
        mode: cli_mode.or(file.mode).unwrap_or(defaults.mode),
    }
}

/// `clap` value parser for `--size`, sharing the prompt's rules.
pub fn parse_size_arg(raw: &str) -> Result<GridSize, String> {
    parse_grid_size(raw)
        .map(|request| request.size())
        .map_err(|err| err.to_string())
}
