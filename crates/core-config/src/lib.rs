//! Configuration loading and parsing.
//!
//! Parses `quill.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [editor]
//! tab_stop = 4
//! quit_times = 3
//! message_timeout_secs = 5
//! ```
//!
//! Every key is optional and unknown keys are ignored. A missing file or a
//! parse failure yields the defaults. Raw values are kept as parsed;
//! [`Config::effective`] clamps them into range and logs each clamp on the
//! `config` target.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{debug, info, warn};

pub use core_text::DEFAULT_TAB_STOP;
pub const DEFAULT_QUIT_TIMES: u32 = 3;
pub const DEFAULT_MESSAGE_TIMEOUT_SECS: u64 = 5;
pub const MAX_TAB_STOP: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorSection {
    #[serde(default = "EditorSection::default_tab_stop")]
    pub tab_stop: usize,
    #[serde(default = "EditorSection::default_quit_times")]
    pub quit_times: u32,
    #[serde(default = "EditorSection::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            quit_times: Self::default_quit_times(),
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl EditorSection {
    const fn default_tab_stop() -> usize {
        DEFAULT_TAB_STOP
    }
    const fn default_quit_times() -> u32 {
        DEFAULT_QUIT_TIMES
    }
    const fn default_message_timeout_secs() -> u64 {
        DEFAULT_MESSAGE_TIMEOUT_SECS
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorSection,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    raw: Option<String>, // file contents as read
    pub file: ConfigFile,    // parsed (or default) data
    pub source: Option<PathBuf>,
}

/// Clamped settings handed to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub tab_stop: usize,
    pub quit_times: u32,
    pub message_timeout: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Config::default().effective()
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("quill.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("quill").join("quill.toml");
    }
    PathBuf::from("quill.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        debug!(target: "config", path = %path.display(), "config_absent");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Clamp the parsed values into their valid ranges.
    pub fn effective(&self) -> EditorConfig {
        let raw = &self.file.editor;

        let tab_stop = raw.tab_stop.clamp(1, MAX_TAB_STOP);
        if tab_stop != raw.tab_stop {
            info!(
                target: "config",
                raw = raw.tab_stop,
                clamped = tab_stop,
                max = MAX_TAB_STOP,
                "tab_stop_clamped"
            );
        }

        let quit_times = raw.quit_times.max(1);
        if quit_times != raw.quit_times {
            info!(
                target: "config",
                raw = raw.quit_times,
                clamped = quit_times,
                "quit_times_clamped"
            );
        }

        EditorConfig {
            tab_stop,
            quit_times,
            message_timeout: Duration::from_secs(raw.message_timeout_secs),
        }
    }
}
