//! Return target kept in [`LocalStorage`].

use crate::storage::{LocalStorage, keys};
use garage_core::auth::ReturnTargetStore;
use garage_core::error::Result;
use std::sync::Arc;

/// Persists the post-login destination under `garage.auth.returnTo`, so a
/// redirect in one console run is honored by the login in the next.
#[derive(Debug, Clone)]
pub struct LocalStorageReturnTarget {
    storage: Arc<LocalStorage>,
}

impl LocalStorageReturnTarget {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }
}

impl ReturnTargetStore for LocalStorageReturnTarget {
    fn remember(&self, path: &str) -> Result<()> {
        self.storage.set_item(keys::RETURN_TO, path)
    }

    fn take(&self) -> Result<Option<String>> {
        self.storage.take_item(keys::RETURN_TO)
    }

    fn peek(&self) -> Result<Option<String>> {
        Ok(self.storage.get_item(keys::RETURN_TO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_target_survives_reopen_and_is_taken_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ls.json");

        let first = LocalStorageReturnTarget::new(Arc::new(LocalStorage::open(&path).unwrap()));
        first.remember("/vehicles").unwrap();
        first.remember("/reports").unwrap();
        drop(first);

        let second = LocalStorageReturnTarget::new(Arc::new(LocalStorage::open(&path).unwrap()));
        assert_eq!(second.peek().unwrap().as_deref(), Some("/reports"));
        assert_eq!(second.take().unwrap().as_deref(), Some("/reports"));
        assert!(second.take().unwrap().is_none());
    }
}
