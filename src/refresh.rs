//! Fetch a new wallpaper, or fall back to a cached one
//!
//! A refresh never fails because of the network: if the download goes wrong
//! a random previously cached image is applied instead. The only failure
//! that reaches the caller is having nothing cached to fall back to.

use std::path::PathBuf;

use rand::Rng;
use serde::Serialize;

use crate::error::{ChangerError, Result};
use crate::picsum::PicsumClient;
use crate::platform::{Resolution, Screen, WallpaperSetter};
use crate::store::{ImageStore, WallpaperId};

/// Outcome of trying to download a new image into the cache
#[derive(Debug)]
pub enum DownloadResult {
    /// Image is cached under this id
    Success(WallpaperId),
    /// Download failed; nothing was cached
    Failure(ChangerError),
}

/// Which image a refresh decided to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Choice {
    /// The image that was just downloaded
    Fresh { id: WallpaperId },
    /// A previously cached image, because the download failed
    Fallback { id: WallpaperId, cause: String },
}

impl Choice {
    pub fn id(&self) -> WallpaperId {
        match self {
            Self::Fresh { id } | Self::Fallback { id, .. } => *id,
        }
    }
}

/// Result of a completed refresh
#[derive(Debug, Clone, Serialize)]
pub struct Refreshed {
    #[serde(flatten)]
    pub choice: Choice,
    pub path: PathBuf,
    pub resolution: Resolution,
}

/// Decide which cached image to apply.
///
/// On success that's the new image. On failure it's a uniformly random pick
/// from `cached`, which must be the listing taken after the failed download
/// was discarded. An empty listing is an error.
pub fn choose_wallpaper<R: Rng + ?Sized>(
    result: DownloadResult,
    cached: &[WallpaperId],
    empty_dir: impl FnOnce() -> PathBuf,
    rng: &mut R,
) -> Result<Choice> {
    match result {
        DownloadResult::Success(id) => Ok(Choice::Fresh { id }),
        DownloadResult::Failure(cause) => {
            if cached.is_empty() {
                return Err(ChangerError::NoCachedWallpapers { dir: empty_dir() });
            }
            let id = cached[rng.random_range(0..cached.len())];
            Ok(Choice::Fallback {
                id,
                cause: cause.to_string(),
            })
        }
    }
}

/// Everything a refresh touches, borrowed for the duration of one run
pub struct Refresher<'a> {
    pub store: &'a ImageStore,
    pub service: &'a PicsumClient,
    pub wallpaper: &'a dyn WallpaperSetter,
    pub screen: &'a dyn Screen,
    pub fallback_resolution: Resolution,
}

impl Refresher<'_> {
    /// Download a new wallpaper and apply it, falling back to the cache
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Refreshed> {
        let resolution = self.screen.resolution().unwrap_or_else(|| {
            tracing::info!(
                "screen size unknown, requesting {}",
                self.fallback_resolution
            );
            self.fallback_resolution
        });

        self.store.ensure_dir()?;

        let id = WallpaperId::now();
        let result = self.download(id, resolution);

        if let DownloadResult::Failure(ref cause) = result {
            tracing::warn!("download of {id} failed, falling back to cache: {cause}");
        }

        let cached = self.store.list()?;
        let choice = choose_wallpaper(result, &cached, || self.store.dir().to_path_buf(), rng)?;

        let path = self.store.path_for(choice.id());
        self.wallpaper.apply(&path)?;

        Ok(Refreshed {
            choice,
            path,
            resolution,
        })
    }

    /// Stream a new image into the cache under `id`
    fn download(&self, id: WallpaperId, resolution: Resolution) -> DownloadResult {
        let stored = self
            .service
            .fetch(id, resolution)
            .and_then(|response| self.store.write(id, response));

        match stored {
            Ok(_) => DownloadResult::Success(id),
            Err(e) => DownloadResult::Failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn ids(raw: &[i64]) -> Vec<WallpaperId> {
        raw.iter().copied().map(WallpaperId::new).collect()
    }

    fn failure() -> DownloadResult {
        DownloadResult::Failure(ChangerError::service(500, "http://service/seed/9/1/1/"))
    }

    fn no_dir() -> PathBuf {
        PathBuf::from("/cache/images")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // choose_wallpaper Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_success_uses_new_image() {
        let mut rng = StdRng::seed_from_u64(7);
        let choice = choose_wallpaper(
            DownloadResult::Success(WallpaperId::new(99)),
            &ids(&[1, 2, 3]),
            no_dir,
            &mut rng,
        )
        .unwrap();

        assert_eq!(choice, Choice::Fresh { id: WallpaperId::new(99) });
    }

    #[test]
    fn test_success_with_empty_cache_listing() {
        let mut rng = StdRng::seed_from_u64(7);
        let choice =
            choose_wallpaper(DownloadResult::Success(WallpaperId::new(99)), &[], no_dir, &mut rng)
                .unwrap();

        assert_eq!(choice.id(), WallpaperId::new(99));
    }

    #[test]
    fn test_failure_picks_cached_image() {
        let cached = ids(&[10, 20, 30]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let choice = choose_wallpaper(failure(), &cached, no_dir, &mut rng).unwrap();
            match choice {
                Choice::Fallback { id, cause } => {
                    assert!(cached.contains(&id));
                    assert!(cause.contains("500"));
                }
                other => panic!("expected fallback, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_failure_pick_covers_whole_listing() {
        let cached = ids(&[10, 20, 30, 40]);
        let mut rng = StdRng::seed_from_u64(1234);

        let seen: HashSet<_> = (0..200)
            .map(|_| choose_wallpaper(failure(), &cached, no_dir, &mut rng).unwrap().id())
            .collect();

        assert_eq!(seen.len(), cached.len());
    }

    #[test]
    fn test_failure_with_empty_cache_is_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = choose_wallpaper(failure(), &[], no_dir, &mut rng).unwrap_err();

        match err {
            ChangerError::NoCachedWallpapers { dir } => assert_eq!(dir, no_dir()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
