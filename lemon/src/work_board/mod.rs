//! The YesterdaysLemon keymap for the Work Louder Work Board.
//!
//! A 4x13 matrix with Magic Sturdy alphas, home row mods, and a clickable encoder in the top right corner.

mod encoder;
mod keymap;

pub use encoder::{ENC_TAP, TAP_DANCE_ACTIONS, dance_enc_finished, dance_enc_reset, encoder_media_key};
pub use keymap::{COL, ROW, UserMacro, get_default_keymap};

pub use crate::layer::NUM_LAYER;
use crate::config::{BehaviorConfig, KeyboardConfig, MatrixConfig, TapDancesConfig};
use crate::keymap::{KeyMap, KeymapError};

pub fn keyboard_config() -> KeyboardConfig {
    KeyboardConfig {
        matrix: MatrixConfig { rows: ROW, cols: COL },
        behavior: BehaviorConfig {
            tap_dance: TapDancesConfig {
                actions: &TAP_DANCE_ACTIONS,
                ..Default::default()
            },
        },
    }
}

/// Build the keymap, checked against the board's matrix and the registered tap dances
pub fn keymap() -> Result<KeyMap<ROW, COL, NUM_LAYER>, KeymapError> {
    let config = keyboard_config();
    let keymap = KeyMap::new(get_default_keymap(), config.behavior.tap_dance.actions.len())?;
    keymap.check_matrix(config.matrix.rows, config.matrix.cols)?;
    info!("Keymap loaded: {} layers on a {}x{} matrix", NUM_LAYER, ROW, COL);
    Ok(keymap)
}
