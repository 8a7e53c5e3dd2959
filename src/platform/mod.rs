//! Platform abstraction layer
//!
//! The puzzle engine is platform-free; this layer adapts it for the browser:
//! - Logger and panic hook setup
//! - JSON level payloads
//! - A session handle the front end drives with taps

#[cfg(target_arch = "wasm32")]
pub mod web;
