//! Document adapters
//!
//! The browser adapter is selected at compile time for `wasm32`. The
//! in-memory document is available on every target for tests and the
//! native preview.

#[cfg(target_arch = "wasm32")]
mod wasm;

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use wasm::{WebContainer, WebDocument, WebRadio};

pub use memory::{MemoryDocument, MemoryElement};
