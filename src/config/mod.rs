//! Configuration and data-directory layout

mod paths;
mod settings;

pub use paths::{Paths, APP_NAME};
pub use settings::{Config, DisplayConfig, DownloadConfig, ServiceConfig, CONFIG_KEYS};
