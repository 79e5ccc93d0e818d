//! File-backed key/value store with browser `localStorage` semantics.
//!
//! Values are strings; callers serialize structured values themselves. Every
//! mutation takes an exclusive lock on a sibling `.lock` file, re-reads the
//! file, applies the change and rewrites the whole map through a temporary
//! file and an atomic rename. Several handles, in one process or many, can
//! share a path without losing each other's writes.

use fs2::FileExt;
use garage_core::error::{GarageError, Result};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Well-known keys.
pub mod keys {
    pub const AUTH_TOKEN: &str = "garage.auth.token";
    pub const AUTH_USER: &str = "garage.auth.user";
    pub const RETURN_TO: &str = "garage.auth.returnTo";
    pub const SIDEBAR_COLLAPSED: &str = "garage.ui.sidebarCollapsed";
    pub const THEME: &str = "garage.ui.theme";
}

type Items = BTreeMap<String, String>;

/// A persisted string map.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    /// Last state read from or written to disk. Only replaced after a
    /// successful read or save.
    items: Mutex<Items>,
}

impl LocalStorage {
    /// Opens the store at `path`, loading existing items.
    ///
    /// A missing or empty file yields an empty store; the file is created on
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = Self::load(&path)?;
        tracing::debug!(path = %path.display(), items = items.len(), "local storage opened");
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    fn load(path: &Path) -> Result<Items> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            GarageError::storage(format!(
                "Failed to parse local storage at {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn cache(&self) -> MutexGuard<'_, Items> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current items as found on disk.
    ///
    /// When the file cannot be read the last known state is returned.
    fn current(&self) -> Items {
        let mut cache = self.cache();
        match Self::load(&self.path) {
            Ok(items) => {
                *cache = items.clone();
                items
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "local storage unreadable, using last known items");
                cache.clone()
            }
        }
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.current().remove(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.current().into_keys().collect()
    }

    /// Applies `f` to the latest items under the file lock and saves the result.
    ///
    /// Nothing is written when `f` leaves the map unchanged. The in-memory
    /// copy is replaced only once the save has succeeded.
    pub fn update<R>(&self, f: impl FnOnce(&mut Items) -> R) -> Result<R> {
        let mut cache = self.cache();
        let _lock = FileLock::acquire(&self.path)?;

        let before = Self::load(&self.path)?;
        let mut items = before.clone();
        let out = f(&mut items);

        if items != before {
            self.save(&items)?;
        }
        *cache = items;
        Ok(out)
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.update(|items| {
            items.insert(key.to_string(), value);
        })
    }

    /// Sets several keys with a single write.
    pub fn set_items(&self, entries: &[(&str, String)]) -> Result<()> {
        self.update(|items| {
            for (key, value) in entries {
                items.insert((*key).to_string(), value.clone());
            }
        })
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.remove_items(&[key])
    }

    /// Removes several keys with a single write.
    pub fn remove_items(&self, keys: &[&str]) -> Result<()> {
        self.update(|items| {
            for key in keys {
                items.remove(*key);
            }
        })
    }

    /// Removes `key` and returns its value in one locked step.
    pub fn take_item(&self, key: &str) -> Result<Option<String>> {
        self.update(|items| items.remove(key))
    }

    pub fn clear(&self) -> Result<()> {
        self.update(|items| items.clear())
    }

    /// Writes the map through a temporary file and an atomic rename.
    fn save(&self, items: &Items) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| GarageError::storage("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| GarageError::storage("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<path>.lock`, released when dropped.
///
/// The lock file itself stays on disk; removing it would let a waiting
/// process lock an unlinked inode.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive().map_err(|e| {
            GarageError::storage(format!(
                "Failed to lock {}: {}",
                lock_path.display(),
                e
            ))
        })?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
