//! Keymap for the Work Louder Work Board.
//!
//! The keymap is a validated table of [`types::action::KeyAction`]s addressed by `(layer, row, col)`,
//! and the encoder click is a tap dance which sends media keys.
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub use lemon_types as types;

pub mod config;
pub mod keymap;
pub mod layer;
pub mod layout_macro;
pub mod registry;
pub mod tap_dance;
pub mod work_board;
