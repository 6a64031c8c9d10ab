//! Display abstraction and screen buffer for the motion watch
//!
//! This crate provides:
//! - `Screen`, a five-row text buffer that receives the dashboard's labels
//! - `DisplayBackend` trait for panels that can draw rows of text
//! - `render`, which copies a screen onto a backend
//!
//! # Architecture
//!
//! The dashboard writes label text into a `Screen` (it implements
//! `LabelSink`). The firmware hands finished screens to a display task,
//! which renders them into a panel driver implementing `DisplayBackend` and
//! then flushes the panel.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod render;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use render::render;
pub use screen::{Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};
