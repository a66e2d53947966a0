//! Import form client.
//!
//! Keeps the URL and file field groups of the shop import form in step with
//! the `source_type` radios. Browser and native builds are selected with
//! compile-time `cfg`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod exports;

#[cfg(not(target_arch = "wasm32"))]
pub mod preview;

pub use application::services::{BoundForm, FieldToggler, ToggleOutcome};
pub use config::{ConfigError, LogLevel, TogglerConfig};
pub use infrastructure::bootstrap::BootstrapError;
pub use ports::outbound::DomError;
