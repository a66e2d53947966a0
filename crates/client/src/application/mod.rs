//! Application layer: the field toggler and source pre-check.

pub mod services;
