//! Confirmation prompt channel.
//!
//! A single-slot request/response channel: each request carries a one-shot
//! completion handle, and the awaiting caller receives a [`Confirmation`]
//! future that always settles to `true` or `false`.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Identifier of a confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmId(pub u64);

/// Caller-supplied prompt options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
    /// Styles the confirm button as destructive. No behavioral effect.
    #[serde(default)]
    pub danger: bool,
}

fn default_confirm_label() -> String {
    "Confirm".to_string()
}

fn default_cancel_label() -> String {
    "Cancel".to_string()
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
            danger: false,
        }
    }

    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

/// The user interaction that settles a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmAction {
    /// Confirm button.
    Confirm,
    /// Cancel button.
    Cancel,
    /// Click on the backdrop around the dialog.
    Overlay,
    /// Cancel key binding (Escape).
    CancelKey,
}

impl ConfirmAction {
    pub fn answer(self) -> bool {
        matches!(self, ConfirmAction::Confirm)
    }
}

/// What a host needs to render the pending prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmView {
    pub id: ConfirmId,
    #[serde(flatten)]
    pub options: ConfirmOptions,
}

struct PendingConfirm {
    view: ConfirmView,
    responder: oneshot::Sender<bool>,
}

/// Awaitable outcome of a confirmation request.
///
/// Never fails: if the request is dropped without an answer (store torn
/// down), it resolves to `false`.
#[derive(Debug)]
pub struct Confirmation {
    id: ConfirmId,
    receiver: oneshot::Receiver<bool>,
}

impl Confirmation {
    pub fn id(&self) -> ConfirmId {
        self.id
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|answer| answer.unwrap_or(false))
    }
}

/// Result of installing a new prompt.
#[derive(Debug)]
pub struct AskOutcome {
    pub confirmation: Confirmation,
    /// The request that was pending and has been resolved `false`, if any.
    pub superseded: Option<ConfirmId>,
}

/// Single-slot holder of the pending prompt.
#[derive(Default)]
pub struct ConfirmChannel {
    next_id: u64,
    pending: Option<PendingConfirm>,
}

impl ConfirmChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new prompt.
    ///
    /// A prompt that is still pending is resolved `false` first, so its caller
    /// never waits on a dialog that is no longer displayed.
    pub fn ask(&mut self, options: ConfirmOptions) -> AskOutcome {
        let superseded = self.pending.take().map(|previous| {
            let id = previous.view.id;
            let _ = previous.responder.send(false);
            id
        });

        self.next_id += 1;
        let id = ConfirmId(self.next_id);
        let (responder, receiver) = oneshot::channel();
        self.pending = Some(PendingConfirm {
            view: ConfirmView { id, options },
            responder,
        });

        AskOutcome {
            confirmation: Confirmation { id, receiver },
            superseded,
        }
    }

    /// Settles the pending prompt if `id` still names it.
    ///
    /// Returns `false` for stale ids (already answered or superseded).
    pub fn resolve(&mut self, id: ConfirmId, action: ConfirmAction) -> bool {
        match self.pending.take() {
            Some(pending) if pending.view.id == id => {
                let _ = pending.responder.send(action.answer());
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    pub fn current(&self) -> Option<&ConfirmView> {
        self.pending.as_ref().map(|pending| &pending.view)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl std::fmt::Debug for ConfirmChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmChannel")
            .field("next_id", &self.next_id)
            .field("pending", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn test_default_labels() {
        let options = ConfirmOptions::new("Delete", "Delete this job card?");
        assert_eq!(options.confirm_label, "Confirm");
        assert_eq!(options.cancel_label, "Cancel");
        assert!(!options.danger);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ConfirmOptions =
            serde_json::from_str(r#"{"title":"T","message":"M","danger":true}"#).unwrap();
        assert_eq!(options.confirm_label, "Confirm");
        assert!(options.danger);
    }

    #[test]
    fn test_confirm_resolves_true() {
        let mut channel = ConfirmChannel::new();
        let outcome = channel.ask(ConfirmOptions::new("T", "M"));
        let id = outcome.confirmation.id();

        assert!(channel.resolve(id, ConfirmAction::Confirm));
        assert!(!channel.is_pending());
        assert_eq!(outcome.confirmation.now_or_never(), Some(true));
    }

    #[test]
    fn test_cancel_variants_resolve_false() {
        for action in [
            ConfirmAction::Cancel,
            ConfirmAction::Overlay,
            ConfirmAction::CancelKey,
        ] {
            let mut channel = ConfirmChannel::new();
            let outcome = channel.ask(ConfirmOptions::new("T", "M"));
            let id = outcome.confirmation.id();
            assert!(channel.resolve(id, action));
            assert_eq!(outcome.confirmation.now_or_never(), Some(false));
        }
    }

    #[test]
    fn test_pending_until_answered() {
        let mut channel = ConfirmChannel::new();
        let mut outcome = channel.ask(ConfirmOptions::new("T", "M"));

        assert!((&mut outcome.confirmation).now_or_never().is_none());
        assert!(channel.is_pending());
    }

    #[test]
    fn test_second_ask_supersedes_first_with_false() {
        let mut channel = ConfirmChannel::new();
        let first = channel.ask(ConfirmOptions::new("First", "M"));
        let second = channel.ask(ConfirmOptions::new("Second", "M"));

        assert_eq!(second.superseded, Some(first.confirmation.id()));
        assert_eq!(first.confirmation.now_or_never(), Some(false));
        assert_eq!(channel.current().map(|v| v.options.title.as_str()), Some("Second"));
    }

    #[test]
    fn test_stale_id_does_not_resolve_current() {
        let mut channel = ConfirmChannel::new();
        let first = channel.ask(ConfirmOptions::new("First", "M"));
        let first_id = first.confirmation.id();
        let mut second = channel.ask(ConfirmOptions::new("Second", "M"));

        assert!(!channel.resolve(first_id, ConfirmAction::Confirm));
        assert!(channel.is_pending());
        assert!((&mut second.confirmation).now_or_never().is_none());
    }

    #[test]
    fn test_resolves_at_most_once() {
        let mut channel = ConfirmChannel::new();
        let outcome = channel.ask(ConfirmOptions::new("T", "M"));
        let id = outcome.confirmation.id();

        assert!(channel.resolve(id, ConfirmAction::Cancel));
        assert!(!channel.resolve(id, ConfirmAction::Confirm));
        assert_eq!(outcome.confirmation.now_or_never(), Some(false));
    }

    #[test]
    fn test_dropped_channel_resolves_false() {
        let mut channel = ConfirmChannel::new();
        let outcome = channel.ask(ConfirmOptions::new("T", "M"));
        drop(channel);

        assert_eq!(outcome.confirmation.now_or_never(), Some(false));
    }
}
