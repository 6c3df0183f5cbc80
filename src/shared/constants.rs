use ratatui::style::Color;

pub const APP_NAME: &str = "Gridsketch";

pub const CONFIG_FILE: &str = "gridsketch.config";
pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const CONFIG_KEY_GRID_SIZE: &str = "grid-size";
pub const CONFIG_KEY_MODE: &str = "mode";

/// Paint for cells with no colour of their own
pub const CANVAS_BACKGROUND: Color = Color::Rgb(255, 255, 255);

pub const BUTTON_IDLE: Color = Color::Rgb(0x4C, 0xAF, 0x50);
pub const BUTTON_ACTIVE: Color = Color::Rgb(0x2E, 0x7D, 0x32);

pub const TICK_MS: u64 = 50;

pub const HELP_LINE: &str = "[s] size  [c] clear  [n] default  [r] random  [d] darken  [q] quit";
