//! UI orchestration domain module.
//!
//! # Module Structure
//!
//! - `toast`: self-expiring notification list
//! - `confirm`: single-slot awaitable yes/no prompt
//! - `modal`: single-slot dialog with caller-supplied content
//! - `store`: the injected store composing the three channels
//!
//! # Usage
//!
//! ```ignore
//! use garage_core::ui::{UiStore, ConfirmOptions};
//!
//! let store = UiStore::default();
//! store.toast().success("Job card created");
//! if store.confirm(ConfirmOptions::new("Delete", "Delete this invoice?").danger()).await {
//!     // ...
//! }
//! ```

mod confirm;
mod modal;
mod store;
mod toast;

pub use confirm::{
    AskOutcome, ConfirmAction, ConfirmChannel, ConfirmId, ConfirmOptions, ConfirmView,
    Confirmation,
};
pub use modal::{ModalChannel, ModalContent, ModalDismiss, ModalId, ModalRequest, Renderable};
pub use store::{ModalView, Toasts, UiSnapshot, UiStore, UiStoreConfig};
pub use toast::{DEFAULT_TOAST_TTL, ToastChannel, ToastId, ToastItem, ToastKind};
