//! Thin bindings to the OS wallpaper and display APIs
//!
//! Everything OS-specific sits behind [`WallpaperSetter`] and [`Screen`] so
//! the refresh logic can run against fakes in tests.

mod desktop;
#[cfg(test)]
pub(crate) mod fake;
mod screen;

pub use self::desktop::SystemWallpaper;
pub use self::screen::{parse_xrandr, SystemScreen};

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Reads and sets the desktop wallpaper
pub trait WallpaperSetter {
    /// Path of the wallpaper currently shown
    fn current(&self) -> Result<String>;

    /// Show the image at `path` as the wallpaper
    fn apply(&self, path: &Path) -> Result<()>;
}

/// Reports the primary display's size
pub trait Screen {
    /// `None` when the platform can't tell
    fn resolution(&self) -> Option<Resolution>;
}
