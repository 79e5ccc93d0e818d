//! UI preferences domain module.
//!
//! - `model`: sidebar and theme preferences
//! - `repository`: persistence trait

pub mod model;
pub mod repository;

pub use model::{
    DEFAULT_ACCENT_COLOR, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, ThemeColors,
    UiPreferences,
};
pub use repository::PreferencesRepository;
