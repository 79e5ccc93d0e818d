//! UI orchestration store.
//!
//! Composes the toast, confirm and modal channels behind one state container.
//! The store is a cheap cloneable handle created once at application start and
//! injected wherever pages need it; independent instances do not share state.
//!
//! Every mutation publishes a fresh [`UiSnapshot`] on a `watch` channel so the
//! host renderers can subscribe without polling.

use super::confirm::{ConfirmAction, ConfirmChannel, ConfirmId, ConfirmOptions, ConfirmView, Confirmation};
use super::modal::{ModalChannel, ModalContent, ModalDismiss, ModalId, ModalRequest, Renderable};
use super::toast::{DEFAULT_TOAST_TTL, ToastChannel, ToastId, ToastItem, ToastKind};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;

/// Tunables for a [`UiStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiStoreConfig {
    /// Delay after which a toast removes itself.
    pub toast_ttl: Duration,
}

impl Default for UiStoreConfig {
    fn default() -> Self {
        Self {
            toast_ttl: DEFAULT_TOAST_TTL,
        }
    }
}

/// Rendered modal as published to subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub id: ModalId,
    pub title: String,
    pub content: Value,
}

/// Everything a host needs to draw the overlay layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    pub toasts: Vec<ToastItem>,
    pub confirm: Option<ConfirmView>,
    pub modal: Option<ModalView>,
}

#[derive(Debug, Default)]
struct UiState {
    toasts: ToastChannel,
    confirm: ConfirmChannel,
    modal: ModalChannel,
}

impl UiState {
    fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            toasts: self.toasts.list().to_vec(),
            confirm: self.confirm.current().cloned(),
            modal: self.modal.current().map(|modal| ModalView {
                id: modal.id,
                title: modal.title.clone(),
                content: modal.render_content(),
            }),
        }
    }
}

struct StoreInner {
    config: UiStoreConfig,
    state: Mutex<UiState>,
    snapshots: watch::Sender<UiSnapshot>,
}

/// Process-wide UI state container, passed around as an explicit handle.
#[derive(Clone)]
pub struct UiStore {
    inner: Arc<StoreInner>,
}

impl UiStore {
    pub fn new(config: UiStoreConfig) -> Self {
        let (snapshots, _) = watch::channel(UiSnapshot::default());
        Self {
            inner: Arc::new(StoreInner {
                config,
                state: Mutex::new(UiState::default()),
                snapshots,
            }),
        }
    }

    pub fn config(&self) -> &UiStoreConfig {
        &self.inner.config
    }

    /// Subscribes to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<UiSnapshot> {
        self.inner.snapshots.subscribe()
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, UiState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `f` under the state lock and publishes the resulting snapshot.
    fn mutate<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        let mut state = self.lock();
        let result = f(&mut state);
        self.inner.snapshots.send_replace(state.snapshot());
        result
    }

    // ============================================================================
    // Toasts
    // ============================================================================

    /// Shows a toast and schedules its automatic dismissal.
    pub fn push_toast(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let message = message.into();
        let id = self.mutate(|state| state.toasts.push(kind, message));
        tracing::debug!(toast_id = id.0, ?kind, "toast pushed");
        self.schedule_expiry(id);
        id
    }

    /// Removes a toast. Unknown or already removed ids are a no-op.
    pub fn dismiss_toast(&self, id: ToastId) -> bool {
        let removed = self.mutate(|state| state.toasts.dismiss(id));
        if removed {
            tracing::debug!(toast_id = id.0, "toast dismissed");
        }
        removed
    }

    pub fn toasts(&self) -> Vec<ToastItem> {
        self.lock().toasts.list().to_vec()
    }

    /// Shorthand helpers: `store.toast().success("Saved")`.
    pub fn toast(&self) -> Toasts<'_> {
        Toasts { store: self }
    }

    fn schedule_expiry(&self, id: ToastId) {
        let ttl = self.inner.config.toast_ttl;
        let store: Weak<StoreInner> = Arc::downgrade(&self.inner);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    if let Some(inner) = store.upgrade() {
                        UiStore { inner }.dismiss_toast(id);
                    }
                });
            }
            Err(_) => {
                tracing::warn!(
                    toast_id = id.0,
                    "no async runtime available, toast will stay until dismissed"
                );
            }
        }
    }

    // ============================================================================
    // Confirm
    // ============================================================================

    /// Displays a yes/no prompt and returns a future of the user's answer.
    ///
    /// If another prompt is still pending it is answered `false` and replaced.
    pub fn confirm(&self, options: ConfirmOptions) -> Confirmation {
        let outcome = self.mutate(|state| state.confirm.ask(options));
        if let Some(previous) = outcome.superseded {
            tracing::warn!(
                superseded = previous.0,
                replacement = outcome.confirmation.id().0,
                "confirm requested while another was pending, previous answered false"
            );
        }
        outcome.confirmation
    }

    /// Settles the pending prompt from a host interaction.
    ///
    /// Returns `false` when `id` no longer names the pending prompt.
    pub fn resolve_confirm(&self, id: ConfirmId, action: ConfirmAction) -> bool {
        let resolved = self.mutate(|state| state.confirm.resolve(id, action));
        if resolved {
            tracing::debug!(confirm_id = id.0, ?action, "confirm resolved");
        } else {
            tracing::debug!(confirm_id = id.0, "ignoring stale confirm resolution");
        }
        resolved
    }

    pub fn pending_confirm(&self) -> Option<ConfirmView> {
        self.lock().confirm.current().cloned()
    }

    // ============================================================================
    // Modal
    // ============================================================================

    /// Opens a modal, replacing any modal already shown.
    pub fn open_modal<C>(&self, title: impl Into<String>, content: C) -> ModalId
    where
        C: Renderable + 'static,
    {
        let title = title.into();
        let content = ModalContent::new(content);
        let id = self.mutate(|state| state.modal.open(title, content));
        tracing::debug!(modal_id = id.0, "modal opened");
        id
    }

    /// Closes the modal. The single exit path for every dismissal affordance.
    pub fn close_modal(&self) {
        if let Some(id) = self.mutate(|state| state.modal.close()) {
            tracing::debug!(modal_id = id.0, "modal closed");
        }
    }

    /// Host entry point for overlay clicks, the close control and the cancel key.
    pub fn dismiss_modal(&self, reason: ModalDismiss) {
        tracing::trace!(?reason, "modal dismiss requested");
        self.close_modal();
    }

    pub fn current_modal(&self) -> Option<ModalRequest> {
        self.lock().modal.current().cloned()
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new(UiStoreConfig::default())
    }
}

impl std::fmt::Debug for UiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiStore")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Kind-specific toast helpers bound to a store.
pub struct Toasts<'a> {
    store: &'a UiStore,
}

impl Toasts<'_> {
    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.store.push_toast(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.store.push_toast(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.store.push_toast(ToastKind::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.store.push_toast(ToastKind::Warning, message)
    }
}
