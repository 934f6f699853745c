//! Desktop notifications for the background daemon
//!
//! Download failures are absorbed by the fallback and never shown; only a
//! refresh that could not set any wallpaper reaches the user.

use notify_rust::Notification;

use crate::config::APP_NAME;
use crate::error::ChangerError;

/// Tell the user a refresh left the wallpaper unchanged
pub fn refresh_failed(err: &ChangerError) {
    let body = match err {
        ChangerError::NoCachedWallpapers { .. } => {
            "Couldn't download a new wallpaper and there is no earlier one to use. \
             Check your connection and choose \"Set new wallpaper\" again."
                .to_string()
        }
        other => other.to_string(),
    };

    if let Err(e) = Notification::new()
        .summary("Wallpaper not changed")
        .body(&body)
        .icon("dialog-warning")
        .appname(APP_NAME)
        .timeout(5000) // 5 seconds
        .show()
    {
        tracing::debug!("could not show notification: {e}");
    }
}
