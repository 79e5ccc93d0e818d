//! Domain core of the Garage Console.
//!
//! UI orchestration (toasts, confirmations, modals), role-based navigation,
//! the route guard and the models behind persisted UI preferences.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod nav;
pub mod preferences;
pub mod ui;

// Re-export common error type
pub use error::GarageError;
