//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::utils::constants::CONFIG_FILE_NAME;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// List sprites whose visible flag is off
    pub show_hidden_sprites: bool,
    /// When off, every refresh drops the selection
    pub keep_selection_on_refresh: bool,
    pub export_folder: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_hidden_sprites: true,
            keep_selection_on_refresh: true,
            export_folder: None,
        }
    }
}

/// Parse `sprite_viewer.toml` in the same folder as the binary
pub fn parse_config() -> eyre::Result<ViewerConfig> {
    let path = match env::current_exe() {
        Ok(path) => match path.parent() {
            Some(parent) => parent.join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        },
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<ViewerConfig> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let mut config = parse_config_from_str(&buffer)?;

    // relative to the config file, not to the working directory
    if let (Some(folder), Some(root)) = (config.export_folder.as_mut(), path.parent()) {
        if folder.is_relative() {
            *folder = root.join(&*folder);
        }
    }

    Ok(config)
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<ViewerConfig> {
    let config: ViewerConfig = toml::from_str(s)?;

    Ok(config)
}
