//! Daily freshness check for the active wallpaper
//!
//! A wallpaper set by this tool is named after the millisecond timestamp it
//! was fetched at, so the file name alone tells whether it is from today.

use chrono::{Local, NaiveDate};

use crate::store::WallpaperId;

/// Extract the candidate id from a wallpaper path.
///
/// Handles both `/` and `\` separators regardless of the host OS, and keeps
/// everything before the first `.` of the file name.
pub fn candidate_id(path: &str) -> &str {
    let file_name = path.rsplit(&['/', '\\'][..]).next().unwrap_or(path);
    file_name.split('.').next().unwrap_or(file_name)
}

/// Whether the wallpaper at `path` was fetched today (local time)
pub fn is_fresh_today(path: &str) -> bool {
    is_fresh_on(path, Local::now().date_naive())
}

/// Whether the wallpaper at `path` was fetched on `today`.
///
/// Names that aren't a millisecond timestamp (an OS default wallpaper, for
/// instance) are never fresh.
pub fn is_fresh_on(path: &str, today: NaiveDate) -> bool {
    candidate_id(path)
        .parse::<WallpaperId>()
        .ok()
        .and_then(WallpaperId::fetched_at)
        .is_some_and(|fetched| fetched.date_naive() == today)
}
