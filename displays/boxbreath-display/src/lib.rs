//! Text-mode display for Boxbreath
//!
//! This crate provides:
//! - `DisplayBackend` trait for anything that can show rows of text
//! - `Screen` buffer with dirty tracking
//! - `BoxCanvas` for drawing the breathing square and its marker
//! - `Renderer` that builds a screen for each session state
//!
//! # Architecture
//!
//! The renderer only writes into a `Screen`. Pushing the screen to a real
//! output (terminal, small OLED) is the backend's job, through `present`.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod canvas;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::{present, DisplayBackend, DisplayError};
pub use canvas::{BoxCanvas, MARKER};
pub use renderer::Renderer;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
