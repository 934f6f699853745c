//! In-memory platform doubles for tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::{Resolution, Screen, WallpaperSetter};
use crate::error::Result;

/// Wallpaper backend that remembers what it was asked to show
#[derive(Clone)]
pub struct FakeWallpaper {
    current: Rc<RefCell<String>>,
    applied: Rc<RefCell<Vec<PathBuf>>>,
}

impl FakeWallpaper {
    pub fn showing(path: impl Into<String>) -> Self {
        Self {
            current: Rc::new(RefCell::new(path.into())),
            applied: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Pretend the OS now shows `path`, without recording an apply
    pub fn set_current(&self, path: &Path) {
        *self.current.borrow_mut() = path.to_string_lossy().into_owned();
    }

    pub fn applied(&self) -> Vec<PathBuf> {
        self.applied.borrow().clone()
    }
}

impl WallpaperSetter for FakeWallpaper {
    fn current(&self) -> Result<String> {
        Ok(self.current.borrow().clone())
    }

    fn apply(&self, path: &Path) -> Result<()> {
        self.set_current(path);
        self.applied.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Screen with a fixed (or unknown) size
pub struct FakeScreen(pub Option<Resolution>);

impl Screen for FakeScreen {
    fn resolution(&self) -> Option<Resolution> {
        self.0
    }
}
