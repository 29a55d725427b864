//! # Lemon Types
//!
//! Fundamental type definitions shared by the Lemon keymap crates.
//!
//! ## Modules
//!
//! - [`action`] - Keyboard actions (key presses, layer operations, tap-hold, tap dance)
//! - [`keycode`] - HID keycodes, consumer (media) keys and firmware special keys
//! - [`modifier`] - Modifier key combinations

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
