mod cache;
mod config;
mod daemon;
mod wallpaper;

pub use self::cache::cache;
pub use self::config::config;
pub use self::daemon::daemon;
pub use self::wallpaper::{check, refresh, status};
