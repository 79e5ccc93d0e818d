//! Toast notification channel.
//!
//! Holds the ordered list of live toasts. Expiry scheduling lives in
//! [`UiStore`](super::UiStore), which owns the runtime handle; this channel is
//! plain state so it can be inspected and tested synchronously.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long a toast stays visible when nobody dismisses it.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(3500);

/// Severity of a toast, determining its visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Identifier of a toast. Assigned monotonically and never reused by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A short-lived, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastItem {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    /// Push time, for hosts that want to render relative timestamps.
    pub created_at: DateTime<Utc>,
}

/// Append-only list of toasts in insertion order.
#[derive(Debug, Default)]
pub struct ToastChannel {
    next_id: u64,
    items: Vec<ToastItem>,
}

impl ToastChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its freshly assigned id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.items.push(ToastItem {
            id,
            kind,
            message: message.into(),
            created_at: Utc::now(),
        });
        id
    }

    /// Removes the toast with `id`.
    ///
    /// Returns `false` when the toast was already gone, which makes a late
    /// expiry after a manual dismissal (or the reverse) a no-op.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn list(&self) -> &[ToastItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut channel = ToastChannel::new();
        let first = channel.push(ToastKind::Success, "Saved");
        let second = channel.push(ToastKind::Error, "Failed");

        assert!(second > first);
        assert_eq!(channel.len(), 2);
        assert_eq!(channel.list()[0].message, "Saved");
        assert_eq!(channel.list()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut channel = ToastChannel::new();
        let id = channel.push(ToastKind::Info, "Heads up");

        assert!(channel.dismiss(id));
        assert!(!channel.dismiss(id));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismissal() {
        let mut channel = ToastChannel::new();
        let first = channel.push(ToastKind::Info, "one");
        channel.dismiss(first);
        let second = channel.push(ToastKind::Info, "two");

        assert_ne!(first, second);
    }

    #[test]
    fn test_dismiss_keeps_order_of_remaining() {
        let mut channel = ToastChannel::new();
        let a = channel.push(ToastKind::Info, "a");
        let b = channel.push(ToastKind::Warning, "b");
        let c = channel.push(ToastKind::Success, "c");

        channel.dismiss(b);

        let ids: Vec<_> = channel.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ToastKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
