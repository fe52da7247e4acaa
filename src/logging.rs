//! File logging. Stdout belongs to the terminal UI, so records go to
//! `<cache dir>/ledgerview/ledgerview.log`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::infra::config::paths::log_dir;

pub const LOG_FILE_NAME: &str = "ledgerview.log";

/// Best effort: without a writable log file the app runs unlogged.
pub fn init(level: LevelFilter) -> Option<PathBuf> {
    let dir = log_dir().ok()?;
    init_in(&dir, level)
}

fn init_in(dir: &Path, level: LevelFilter) -> Option<PathBuf> {
    if level == LevelFilter::Off {
        return None;
    }
    fs::create_dir_all(dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path).ok()?;
    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level, config, file).ok()?;
    Some(path)
}
