use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangerError, Result};

/// Directory name under the platform's application data root
pub const APP_NAME: &str = "wallpaper-changer";

/// Sub-directory holding downloaded wallpapers
const IMAGES_DIR: &str = "images";

/// Manages paths for wallpaper-changer configuration and data
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root data directory (e.g. ~/.config/wallpaper-changer)
    pub root: PathBuf,
    /// Image cache directory (<root>/images)
    pub images_dir: PathBuf,
    /// Configuration file path (<root>/config.toml)
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths under the platform's application data directory
    pub fn new() -> Result<Self> {
        let app_data = dirs::config_dir().ok_or(ChangerError::NoDataDir)?;
        Ok(Self::with_root(app_data.join(APP_NAME)))
    }

    /// Build paths rooted at an explicit directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            images_dir: root.join(IMAGES_DIR),
            config_file: root.join("config.toml"),
            root,
        }
    }

    /// Ensure the root directory exists
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Check if the config file exists
    pub fn config_exists(&self) -> bool {
        self.config_file.exists()
    }
}
