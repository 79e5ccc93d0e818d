//! Storage for the location to resume after login.

use crate::error::Result;
use std::sync::{Mutex, PoisonError};

/// Single-slot store for the path a signed-out user was heading to.
///
/// Implementations that persist the slot let a later process finish the
/// login started by an earlier one.
pub trait ReturnTargetStore: Send + Sync + std::fmt::Debug {
    /// Replaces the remembered path.
    fn remember(&self, path: &str) -> Result<()>;

    /// Returns the remembered path and clears it.
    fn take(&self) -> Result<Option<String>>;

    fn peek(&self) -> Result<Option<String>>;
}

/// Keeps the slot in memory for the lifetime of the guard.
#[derive(Debug, Default)]
pub struct MemoryReturnTarget {
    slot: Mutex<Option<String>>,
}

impl MemoryReturnTarget {
    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReturnTargetStore for MemoryReturnTarget {
    fn remember(&self, path: &str) -> Result<()> {
        *self.slot() = Some(path.to_string());
        Ok(())
    }

    fn take(&self) -> Result<Option<String>> {
        Ok(self.slot().take())
    }

    fn peek(&self) -> Result<Option<String>> {
        Ok(self.slot().clone())
    }
}
