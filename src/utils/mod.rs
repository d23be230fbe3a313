//! Shared helpers that are not tied to a single module.

pub mod text_processing;
