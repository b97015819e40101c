//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and key bindings using crossterm
//! - `display.rs`: Terminal rendering and UI text

pub mod display;
pub mod input;
