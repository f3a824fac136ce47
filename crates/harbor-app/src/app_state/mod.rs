//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one web view, events drained on a poll interval.

mod core;
mod event_handler;
mod init;
mod polling;

pub use self::core::HarborApp;
