//! Local image cache
//!
//! Downloaded wallpapers live in a single flat directory, one file per
//! fetch, named after the millisecond timestamp of the fetch.

mod images;

pub use images::{CachedImage, ImageStore};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// File extension of cached wallpapers
pub const IMAGE_EXTENSION: &str = "jpg";

/// Identifier of a fetched wallpaper: epoch milliseconds at fetch time.
///
/// Doubles as the cache key and the seed sent to the image service. Two
/// fetches in the same millisecond collide; that is not guarded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallpaperId(i64);

impl WallpaperId {
    /// Wrap a raw millisecond timestamp
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Id for a fetch happening right now
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Raw millisecond value
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Cache file name, e.g. `1700000000000.jpg`
    pub fn file_name(self) -> String {
        format!("{}.{}", self.0, IMAGE_EXTENSION)
    }

    /// Recover an id from a cache file name; anything else yields `None`
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(IMAGE_EXTENSION)?.strip_suffix('.')?;
        if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        stem.parse().ok()
    }

    /// Local time at which this image was fetched, if the value is in range
    pub fn fetched_at(self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.0).single()
    }
}

impl fmt::Display for WallpaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WallpaperId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Summary of the image cache
#[derive(Debug, Serialize)]
pub struct CacheStatus {
    pub exists: bool,
    pub count: usize,
    pub total_bytes: u64,
    pub newest: Option<WallpaperId>,
    pub oldest: Option<WallpaperId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(WallpaperId::new(1700000000000).file_name(), "1700000000000.jpg");
    }

    #[test]
    fn test_from_file_name_accepts_cache_files() {
        assert_eq!(
            WallpaperId::from_file_name("1700000000000.jpg"),
            Some(WallpaperId::new(1700000000000))
        );
    }

    #[test]
    fn test_from_file_name_rejects_foreign_files() {
        assert_eq!(WallpaperId::from_file_name("default-wallpaper.jpg"), None);
        assert_eq!(WallpaperId::from_file_name("1700000000000.png"), None);
        assert_eq!(WallpaperId::from_file_name("1700000000000jpg"), None);
        assert_eq!(WallpaperId::from_file_name(".tmpA1b2.part"), None);
        assert_eq!(WallpaperId::from_file_name(".jpg"), None);
        assert_eq!(WallpaperId::from_file_name("+5.jpg"), None);
    }

    #[test]
    fn test_now_is_recent() {
        let before = Utc::now().timestamp_millis();
        let id = WallpaperId::now();
        let after = Utc::now().timestamp_millis();
        assert!(id.as_millis() >= before && id.as_millis() <= after);
    }

    #[test]
    fn test_fetched_at_out_of_range() {
        assert!(WallpaperId::new(i64::MAX).fetched_at().is_none());
        assert!(WallpaperId::new(0).fetched_at().is_some());
    }

    #[test]
    fn test_display_and_parse() {
        let id: WallpaperId = "42".parse().unwrap();
        assert_eq!(id.to_string(), "42");
        assert!("forty-two".parse::<WallpaperId>().is_err());
    }
}
