//! Reporting repository outcomes through the toast channel.

use garage_core::api::ApiResult;
use garage_core::ui::UiStore;

const FALLBACK_FAILURE: &str = "Request failed";

/// Toasts the outcome of a repository call and passes the data through.
///
/// Success uses the envelope's message when present, otherwise
/// `success_message`. An envelope with `success: false` is reported as an
/// error like a failed call.
pub fn report_outcome<T>(store: &UiStore, result: ApiResult<T>, success_message: &str) -> Option<T> {
    match result {
        Ok(envelope) if envelope.success => {
            let message = envelope
                .message
                .unwrap_or_else(|| success_message.to_string());
            store.toast().success(message);
            envelope.data
        }
        Ok(envelope) => {
            let message = envelope
                .message
                .unwrap_or_else(|| FALLBACK_FAILURE.to_string());
            store.toast().error(message);
            None
        }
        Err(err) => {
            tracing::debug!(status = err.status, "repository call failed: {}", err.message);
            let message = if err.message.trim().is_empty() {
                FALLBACK_FAILURE.to_string()
            } else {
                err.message
            };
            store.toast().error(message);
            None
        }
    }
}
