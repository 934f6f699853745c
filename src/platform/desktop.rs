use std::path::Path;

use super::WallpaperSetter;
use crate::error::{ChangerError, Result};

/// Desktop wallpaper of the running session
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWallpaper;

impl WallpaperSetter for SystemWallpaper {
    fn current(&self) -> Result<String> {
        wallpaper::get().map_err(ChangerError::wallpaper)
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().ok_or_else(|| {
            ChangerError::Wallpaper(format!("non UTF-8 wallpaper path: {}", path.display()))
        })?;

        tracing::info!("setting wallpaper to {path_str}");
        wallpaper::set_from_path(path_str).map_err(ChangerError::wallpaper)
    }
}
