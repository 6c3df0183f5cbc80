use crate::shared::constants;
use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Clone)]
struct LoggerPaths {
    error_path: PathBuf,
    debug_path: PathBuf,
}

lazy_static! {
    static ref LOGGER: Mutex<Option<LoggerPaths>> = Mutex::new(None);
}

fn append_line(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

fn start_file(path: &Path, title: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        let _ = writeln!(file, "=== {} Started: {} ===", title, chrono::Local::now());
    }
}

fn format_line(level: &str, msg: &str) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    format!("[{}][{}] {}", timestamp, level, msg)
}

/// Truncates both log files in the working directory and installs a panic
/// hook that records the backtrace and puts the terminal back.
pub fn init() {
    let error_path = std::env::current_dir()
        .unwrap_or_default()
        .join(constants::ERROR_LOG_FILE);
    let debug_path = error_path.with_file_name(constants::DEBUG_LOG_FILE);

    start_file(&error_path, "Error Log");
    start_file(&debug_path, "Debug Log");

    let paths = LoggerPaths {
        error_path,
        debug_path,
    };
    if let Ok(mut guard) = LOGGER.lock() {
        *guard = Some(paths.clone());
    }

    panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::capture();
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => &s[..],
                None => "Box<Any>",
            },
        };

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let error_msg = format!(
            "\nCRITICAL PANIC at {}:\nMessage: {}\nBacktrace:\n{:?}\n",
            location, msg, backtrace
        );

        append_line(&paths.error_path, &error_msg);
        append_line(&paths.debug_path, &error_msg);

        crate::ui::interactive::force_restore_terminal();
        println!(
            "{} crashed. See {} for details.",
            constants::APP_NAME,
            paths.error_path.display()
        );
    }));
}

pub fn log(level: &str, msg: &str) {
    let Ok(guard) = LOGGER.lock() else {
        return;
    };
    if let Some(paths) = guard.as_ref() {
        let line = format_line(level, msg);
        append_line(&paths.debug_path, &line);

        if level == "ERROR" {
            append_line(&paths.error_path, &line);
        }
    }
}

pub fn info(msg: &str) {
    log("INFO", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}
