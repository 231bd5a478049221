// src/activity/mod.rs
// =============================================================================
// This module turns the raw event feed into human-readable lines.
//
// Submodules:
// - event: parses one JSON event into a typed Activity (or a Skip reason)
// - summary: walks the whole feed and keeps the first MAX_EVENTS activities
// =============================================================================

mod event;
mod summary;

pub use summary::summarize;
