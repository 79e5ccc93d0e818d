//! Terminal renderer for the overlay layer.
//!
//! Watches the store's snapshots, prints toasts and modals to stderr as they
//! appear and answers confirmation prompts.

use garage_core::ui::{
    ConfirmAction, ConfirmId, ConfirmView, ModalId, ToastId, ToastKind, UiSnapshot, UiStore,
};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use tokio::task::JoinHandle;

/// How the host answers confirmation prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPolicy {
    /// Prompt on the terminal.
    Ask,
    AlwaysYes,
}

impl ConfirmPolicy {
    pub fn from_flag(yes: bool) -> Self {
        if yes { Self::AlwaysYes } else { Self::Ask }
    }
}

/// Runs until aborted. Abort the handle once the command is done.
pub fn spawn(store: UiStore, policy: ConfirmPolicy) -> JoinHandle<()> {
    let mut snapshots = store.subscribe();
    tokio::spawn(async move {
        let mut seen_toasts = BTreeSet::new();
        let mut shown_modal = None;
        let mut answered: Option<ConfirmId> = None;

        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            render(&snapshot, &mut seen_toasts, &mut shown_modal);

            if let Some(view) = snapshot.confirm.filter(|v| Some(v.id) != answered) {
                answered = Some(view.id);
                let action = match policy {
                    ConfirmPolicy::AlwaysYes => ConfirmAction::Confirm,
                    ConfirmPolicy::Ask => prompt(view.clone()).await,
                };
                store.resolve_confirm(view.id, action);
            }
        }
    })
}

fn render(
    snapshot: &UiSnapshot,
    seen_toasts: &mut BTreeSet<ToastId>,
    shown_modal: &mut Option<ModalId>,
) {
    for toast in &snapshot.toasts {
        if seen_toasts.insert(toast.id) {
            eprintln!("[{}] {}", kind_label(toast.kind), toast.message);
        }
    }

    let current = snapshot.modal.as_ref().map(|m| m.id);
    if current != *shown_modal {
        if let Some(modal) = &snapshot.modal {
            eprintln!("== {} ==\n{}", modal.title, modal.content);
        }
        *shown_modal = current;
    }
}

fn kind_label(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "ok",
        ToastKind::Error => "error",
        ToastKind::Info => "info",
        ToastKind::Warning => "warn",
    }
}

/// Reads a yes/no answer from stdin. End of input counts as the cancel key.
async fn prompt(view: ConfirmView) -> ConfirmAction {
    let answer = tokio::task::spawn_blocking(move || {
        let options = &view.options;
        let marker = if options.danger { "!" } else { "?" };
        eprint!(
            "{} {}: {} [{}/{}] ",
            marker, options.title, options.message, options.confirm_label, options.cancel_label
        );
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => ConfirmAction::CancelKey,
            Ok(_) => parse_answer(&line),
        }
    })
    .await;

    answer.unwrap_or(ConfirmAction::CancelKey)
}

fn parse_answer(line: &str) -> ConfirmAction {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => ConfirmAction::Confirm,
        _ => ConfirmAction::Cancel,
    }
}
