//! Modal dialog channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied modal body.
///
/// Hosts receive the body as JSON, the same shape the frontend consumes for
/// every other payload.
pub trait Renderable: Send + Sync {
    fn render(&self) -> Value;
}

impl Renderable for Value {
    fn render(&self) -> Value {
        self.clone()
    }
}

impl Renderable for String {
    fn render(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Renderable for &'static str {
    fn render(&self) -> Value {
        Value::String((*self).to_string())
    }
}

/// Identifier of an opened modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalId(pub u64);

/// Caller content, rendered once when the modal is opened.
///
/// Snapshots reuse the rendered value, so `render` never runs while the
/// store's state is locked.
#[derive(Clone)]
pub struct ModalContent {
    source: Arc<dyn Renderable>,
    rendered: Value,
}

impl ModalContent {
    pub fn new<C: Renderable + 'static>(content: C) -> Self {
        let rendered = content.render();
        Self {
            source: Arc::new(content),
            rendered,
        }
    }

    pub fn source(&self) -> &Arc<dyn Renderable> {
        &self.source
    }

    pub fn rendered(&self) -> &Value {
        &self.rendered
    }
}

/// The active modal.
#[derive(Clone)]
pub struct ModalRequest {
    pub id: ModalId,
    pub title: String,
    pub content: ModalContent,
}

impl ModalRequest {
    pub fn render_content(&self) -> Value {
        self.content.rendered().clone()
    }
}

impl fmt::Debug for ModalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalRequest")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", self.content.rendered())
            .finish()
    }
}

impl PartialEq for ModalRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Ways a host lets the user dismiss the modal. All of them close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalDismiss {
    Overlay,
    CloseButton,
    CancelKey,
}

/// Single-slot holder of the active modal. Last write wins.
#[derive(Debug, Default)]
pub struct ModalChannel {
    next_id: u64,
    current: Option<ModalRequest>,
}

impl ModalChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any active modal with a new one.
    pub fn open(&mut self, title: impl Into<String>, content: ModalContent) -> ModalId {
        self.next_id += 1;
        let id = ModalId(self.next_id);
        self.current = Some(ModalRequest {
            id,
            title: title.into(),
            content,
        });
        id
    }

    /// Clears the slot. Returns the id of the modal that was open, if any.
    pub fn close(&mut self) -> Option<ModalId> {
        self.current.take().map(|modal| modal.id)
    }

    pub fn current(&self) -> Option<&ModalRequest> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_replaces_previous() {
        let mut channel = ModalChannel::new();
        channel.open("A", ModalContent::new(json!({"form": "a"})));
        let second = channel.open("B", ModalContent::new(json!({"form": "b"})));

        let current = channel.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.title, "B");
        assert_eq!(current.render_content(), json!({"form": "b"}));
    }

    #[test]
    fn test_close_is_unconditional() {
        let mut channel = ModalChannel::new();
        assert_eq!(channel.close(), None);

        let id = channel.open("Edit vehicle", ModalContent::new("body"));
        assert_eq!(channel.close(), Some(id));
        assert!(channel.current().is_none());
    }

    #[test]
    fn test_string_content_renders_as_json_string() {
        let content: Arc<dyn Renderable> = Arc::new("Plain text".to_string());
        assert_eq!(content.render(), json!("Plain text"));
    }

    #[test]
    fn test_content_rendered_once_at_construction() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct Counting(Arc<AtomicUsize>);
        impl Renderable for Counting {
            fn render(&self) -> Value {
                self.0.fetch_add(1, Ordering::SeqCst);
                json!("counted")
            }
        }

        let calls = Arc::new(AtomicUsize::new(0));
        let mut channel = ModalChannel::new();
        channel.open("Counted", ModalContent::new(Counting(calls.clone())));

        let current = channel.current().unwrap();
        assert_eq!(current.render_content(), json!("counted"));
        assert_eq!(current.render_content(), json!("counted"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
