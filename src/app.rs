//! Wires configuration, cache, image service and platform together
//!
//! Menu actions arrive as [`Command`]s and go through [`App::handle`], so the
//! surface that produces them (stdin, signals, a tray) stays separate from
//! the refresh logic.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::config::{Config, Paths};
use crate::error::{ChangerError, Result};
use crate::freshness;
use crate::picsum::PicsumClient;
use crate::platform::{Screen, SystemScreen, SystemWallpaper, WallpaperSetter};
use crate::refresh::{Refreshed, Refresher};
use crate::store::{CacheStatus, ImageStore};

/// User-triggered actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// "Set new wallpaper": refresh regardless of freshness
    RefreshNow,
    /// Stop the process
    Exit,
}

impl FromStr for Command {
    type Err = ChangerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "refresh" | "r" | "new" => Ok(Self::RefreshNow),
            "exit" | "quit" | "q" => Ok(Self::Exit),
            other => Err(ChangerError::InvalidArgument(format!(
                "Unknown command: '{other}'. Use 'refresh' or 'exit'"
            ))),
        }
    }
}

/// Whether the command loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Outcome of the startup check
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Startup {
    /// Current wallpaper was already fetched today
    AlreadyFresh { current: String },
    /// Wallpaper was refreshed
    Refreshed(Refreshed),
}

/// Snapshot of the current wallpaper and cache
#[derive(Debug, Serialize)]
pub struct Status {
    pub current: Option<String>,
    pub fresh: bool,
    pub cache_dir: PathBuf,
    pub cache: CacheStatus,
}

/// Collapse commands that queued up while a refresh was running.
///
/// Extra refresh requests are dropped; an exit request wins.
pub fn settle_queued(queued: impl IntoIterator<Item = Command>) -> Option<Command> {
    let mut dropped = 0usize;
    for command in queued {
        match command {
            Command::Exit => return Some(Command::Exit),
            Command::RefreshNow => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!("ignored {dropped} refresh request(s) made during a refresh");
    }
    None
}

/// Application context
pub struct App {
    paths: Paths,
    config: Config,
    store: ImageStore,
    service: PicsumClient,
    wallpaper: Box<dyn WallpaperSetter>,
    screen: Box<dyn Screen>,
}

impl App {
    /// Build the app against the real desktop
    pub fn new(paths: Paths, config: Config) -> Result<Self> {
        Self::with_platform(
            paths,
            config,
            Box::new(SystemWallpaper),
            Box::new(SystemScreen),
        )
    }

    /// Build the app with explicit platform collaborators
    pub fn with_platform(
        paths: Paths,
        config: Config,
        wallpaper: Box<dyn WallpaperSetter>,
        screen: Box<dyn Screen>,
    ) -> Result<Self> {
        let service = PicsumClient::new(&config)?;
        let store = ImageStore::new(paths.images_dir.clone());

        Ok(Self {
            paths,
            config,
            store,
            service,
            wallpaper,
            screen,
        })
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Startup behaviour: refresh only if the wallpaper isn't from today
    pub fn check(&self) -> Result<Startup> {
        let current = self.wallpaper.current()?;
        if freshness::is_fresh_today(&current) {
            tracing::info!("wallpaper {current} is from today, nothing to do");
            return Ok(Startup::AlreadyFresh { current });
        }

        tracing::info!("wallpaper {current} is stale, refreshing");
        self.refresh().map(Startup::Refreshed)
    }

    /// Fetch and apply a new wallpaper unconditionally
    pub fn refresh(&self) -> Result<Refreshed> {
        let refresher = Refresher {
            store: &self.store,
            service: &self.service,
            wallpaper: self.wallpaper.as_ref(),
            screen: self.screen.as_ref(),
            fallback_resolution: self.config.fallback_resolution(),
        };
        refresher.run(&mut rand::rng())
    }

    /// Single entry point for menu actions
    pub fn handle(&self, command: Command) -> Result<Flow> {
        match command {
            Command::RefreshNow => {
                let refreshed = self.refresh()?;
                tracing::info!("wallpaper set to {}", refreshed.path.display());
                Ok(Flow::Continue)
            }
            Command::Exit => Ok(Flow::Exit),
        }
    }

    /// Current wallpaper and cache summary.
    ///
    /// A platform that can't report the wallpaper yields `current: None`.
    pub fn status(&self) -> Result<Status> {
        let current = self
            .wallpaper
            .current()
            .map_err(|e| tracing::warn!("could not read current wallpaper: {e}"))
            .ok();
        let fresh = current.as_deref().is_some_and(freshness::is_fresh_today);

        Ok(Status {
            current,
            fresh,
            cache_dir: self.store.dir().to_path_buf(),
            cache: self.store.status()?,
        })
    }
}
