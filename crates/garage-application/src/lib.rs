//! Application layer for the Garage Console.
//!
//! Wires the core channels, resolver and guard to their file-backed adapters
//! and implements the flows that span more than one of them.

pub mod context;
pub mod logout;
pub mod outcome;

pub use context::{ConsoleContext, Navigation};
pub use logout::LogoutFlow;
pub use outcome::report_outcome;
