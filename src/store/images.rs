//! Cached wallpaper images

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::store::{CacheStatus, WallpaperId};

/// One cached wallpaper on disk
#[derive(Debug, Clone, Serialize)]
pub struct CachedImage {
    pub id: WallpaperId,
    pub fetched_at: Option<DateTime<Local>>,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Flat directory of `{id}.jpg` files
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Create a store over `dir`; nothing is touched on disk yet
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the images
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the image for `id` lives (whether or not it exists)
    pub fn path_for(&self, id: WallpaperId) -> PathBuf {
        self.dir.join(id.file_name())
    }

    /// Create the cache directory if it is missing
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.is_dir() {
            tracing::debug!("creating image cache at {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Ids of all cached images, oldest first.
    ///
    /// A missing directory lists as empty; files that are not `{id}.jpg`
    /// (partial downloads, stray files) are skipped.
    pub fn list(&self) -> Result<Vec<WallpaperId>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(id) = entry.file_name().to_str().and_then(WallpaperId::from_file_name) {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    /// Read a cached image into memory
    pub fn read(&self, id: WallpaperId) -> Result<Vec<u8>> {
        Ok(fs::read(self.path_for(id))?)
    }

    /// Stream `reader` into the cache as `{id}.jpg`.
    ///
    /// Bytes go to a hidden temporary file in the cache directory which is
    /// renamed into place only after the stream completes, so a failed
    /// download never leaves a partial `{id}.jpg` behind.
    pub fn write(&self, id: WallpaperId, mut reader: impl Read) -> Result<PathBuf> {
        self.ensure_dir()?;

        let mut partial = tempfile::Builder::new()
            .prefix(".")
            .suffix(".part")
            .tempfile_in(&self.dir)?;
        let bytes = io::copy(&mut reader, partial.as_file_mut())?;
        partial.as_file().sync_all()?;

        let path = self.path_for(id);
        partial.persist(&path)?;
        tracing::debug!("cached {} bytes at {}", bytes, path.display());

        Ok(path)
    }

    /// Cached images with their on-disk details, oldest first
    pub fn entries(&self) -> Result<Vec<CachedImage>> {
        self.list()?
            .into_iter()
            .map(|id| -> Result<CachedImage> {
                let path = self.path_for(id);
                let bytes = fs::metadata(&path)?.len();
                Ok(CachedImage {
                    id,
                    fetched_at: id.fetched_at(),
                    path,
                    bytes,
                })
            })
            .collect()
    }

    /// Summary of what is cached
    pub fn status(&self) -> Result<CacheStatus> {
        let ids = self.list()?;
        let total_bytes = ids
            .iter()
            .filter_map(|id| fs::metadata(self.path_for(*id)).ok())
            .map(|m| m.len())
            .sum();

        Ok(CacheStatus {
            exists: self.dir.is_dir(),
            count: ids.len(),
            total_bytes,
            newest: ids.last().copied(),
            oldest: ids.first().copied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_store(temp_dir: &TempDir) -> ImageStore {
        ImageStore::new(temp_dir.path().join("images"))
    }

    /// Reader that yields some bytes and then fails, like a dropped connection
    struct BrokenStream {
        sent: bool,
    }

    impl Read for BrokenStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.sent = true;
            buf[..4].copy_from_slice(b"\xff\xd8\xff\xe0");
            Ok(4)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_list_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);

        assert!(store.list().unwrap().is_empty());
        assert!(!store.dir().exists());
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);
        store.ensure_dir().unwrap();

        fs::write(store.dir().join("1700000000000.jpg"), b"a").unwrap();
        fs::write(store.dir().join("1600000000000.jpg"), b"b").unwrap();
        fs::write(store.dir().join("notes.txt"), b"c").unwrap();
        fs::write(store.dir().join(".abc123.part"), b"d").unwrap();
        fs::create_dir(store.dir().join("1800000000000.jpg")).unwrap();

        let ids = store.list().unwrap();
        assert_eq!(
            ids,
            vec![
                WallpaperId::new(1600000000000),
                WallpaperId::new(1700000000000)
            ]
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read/Write Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_write_creates_dir_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);
        let id = WallpaperId::new(1700000000000);

        let path = store.write(id, &b"jpeg bytes"[..]).unwrap();

        assert_eq!(path, store.path_for(id));
        assert_eq!(store.read(id).unwrap(), b"jpeg bytes");
        assert_eq!(store.list().unwrap(), vec![id]);
    }

    #[test]
    fn test_failed_write_leaves_nothing_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);
        let id = WallpaperId::new(1700000000000);

        let result = store.write(id, BrokenStream { sent: false });

        assert!(result.is_err());
        assert!(!store.path_for(id).exists());
        assert_eq!(fs::read_dir(store.dir()).unwrap().count(), 0);
    }

    #[test]
    fn test_read_missing_image() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);

        assert!(store.read(WallpaperId::new(1)).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Status Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_status_empty() {
        let temp_dir = TempDir::new().unwrap();
        let status = make_store(&temp_dir).status().unwrap();

        assert!(!status.exists);
        assert_eq!(status.count, 0);
        assert_eq!(status.total_bytes, 0);
        assert!(status.newest.is_none());
    }

    #[test]
    fn test_entries_details() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);
        let id = WallpaperId::new(1700000000000);
        store.write(id, &b"12345"[..]).unwrap();

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].bytes, 5);
        assert_eq!(entries[0].path, store.path_for(id));
        assert_eq!(
            entries[0].fetched_at.map(|t| t.timestamp_millis()),
            Some(1700000000000)
        );
    }

    #[test]
    fn test_status_counts_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let store = make_store(&temp_dir);
        store.write(WallpaperId::new(10), &b"1234"[..]).unwrap();
        store.write(WallpaperId::new(20), &b"123456"[..]).unwrap();

        let status = store.status().unwrap();
        assert!(status.exists);
        assert_eq!(status.count, 2);
        assert_eq!(status.total_bytes, 10);
        assert_eq!(status.oldest, Some(WallpaperId::new(10)));
        assert_eq!(status.newest, Some(WallpaperId::new(20)));
    }
}
