pub mod common;

use lemon::keymap::{KeyMap, KeyPos, KeymapError};
use lemon::layer::Layer;
use lemon::types::action::{Action, KeyAction};
use lemon::types::keycode::{HidKeyCode, KeyCode};
use lemon::types::modifier::ModifierCombination;
use lemon::work_board::{COL, ENC_TAP, NUM_LAYER, ROW, TAP_DANCE_ACTIONS, get_default_keymap, keymap};
use lemon::{k, mo, shifted};

#[test]
fn test_keymap_is_valid() {
    let keymap = keymap().unwrap();
    assert_eq!(keymap.get_keymap_config(), (4, 13, 5));
    assert_eq!(keymap.get_default_layer(), Layer::Base as u8);
}

#[test]
fn test_every_layer_has_the_same_positions() {
    let keymap = keymap().unwrap();
    let base = keymap.position_count(Layer::Base as u8);
    assert_eq!(base, ROW * COL);
    for layer in Layer::ALL {
        assert_eq!(keymap.position_count(layer.index()), base, "layer {}", layer.name());
    }
}

#[test]
fn test_no_undefined_position() {
    let keymap = keymap().unwrap();
    for layer in Layer::ALL {
        for row in 0..ROW as u8 {
            for col in 0..COL as u8 {
                assert!(keymap.action_at(KeyPos::new(layer.index(), row, col)).is_some());
            }
        }
    }
    // Base layer doesn't have transparent keys
    assert!(
        keymap
            .positions()
            .filter(|(pos, _)| pos.layer == Layer::Base as u8)
            .all(|(_, action)| !action.is_transparent())
    );
}

#[test]
fn test_unused_matrix_positions() {
    let keymap = keymap().unwrap();
    for layer in Layer::ALL {
        for (row, col) in [(1, 12), (2, 12), (3, 6), (3, 12)] {
            assert_eq!(
                keymap.action_at(KeyPos::new(layer.index(), row, col)),
                Some(KeyAction::No)
            );
        }
    }
    // 48 keys on the base layer
    let defined = keymap
        .positions()
        .filter(|(pos, action)| pos.layer == 0 && !action.is_empty())
        .count();
    assert_eq!(defined, 48);
}

#[test]
fn test_encoder_click_is_the_tap_dance() {
    let keymap = keymap().unwrap();
    assert_eq!(
        keymap.action_at(KeyPos::new(Layer::Base as u8, 0, 12)),
        Some(KeyAction::TapDance(ENC_TAP))
    );
    let tap_dances = keymap
        .positions()
        .filter(|(_, action)| action.tap_dance_index().is_some())
        .count();
    assert_eq!(tap_dances, 1);
}

#[test]
fn test_encoder_click_through_layers() {
    let mut keymap = keymap().unwrap();

    keymap.activate_layer(Layer::Sym as u8);
    assert_eq!(keymap.resolve(0, 12), Some((0, KeyAction::TapDance(ENC_TAP))));
    keymap.deactivate_layer(Layer::Sym as u8);

    keymap.activate_layer(Layer::Win as u8);
    assert_eq!(keymap.resolve(0, 12), Some((Layer::Win as u8, KeyAction::No)));
}

#[test]
fn test_symbol_layer_resolution() {
    let mut keymap = keymap().unwrap();
    assert_eq!(keymap.resolve(1, 2), Some((0, keymap.action_at(KeyPos::new(0, 1, 2)).unwrap())));

    keymap.activate_layer(Layer::Sym as u8);
    assert_eq!(keymap.highest_active_layer(), Layer::Sym as u8);
    assert_eq!(keymap.resolve(1, 2), Some((Layer::Sym as u8, k!(Minus))));
    assert_eq!(keymap.resolve(1, 1), Some((Layer::Sym as u8, shifted!(Kc1))));
    // Transparent, falls through to the base layer's Backspace
    assert_eq!(keymap.resolve(2, 0), Some((0, k!(Backspace))));
    assert_eq!(keymap.resolve(0, 1), Some((Layer::Sym as u8, mo!(Layer::Fun))));
}

#[test]
fn test_number_layer_back_to_base() {
    let mut keymap = keymap().unwrap();
    keymap.layer_to(Layer::Num as u8);
    assert_eq!(keymap.resolve(0, 7), Some((Layer::Num as u8, k!(Kc8))));
    assert_eq!(
        keymap.resolve(3, 4),
        Some((Layer::Num as u8, KeyAction::Single(Action::LayerToggleOnly(0))))
    );

    keymap.layer_to(Layer::Base as u8);
    assert!(!keymap.is_layer_active(Layer::Num as u8));
    assert_eq!(keymap.resolve(0, 7), Some((0, keymap.action_at(KeyPos::new(0, 0, 7)).unwrap())));
}

#[test]
fn test_window_layer_shortcuts() {
    let keymap = keymap().unwrap();
    assert_eq!(
        keymap.action_at(KeyPos::new(Layer::Win as u8, 0, 7)),
        Some(KeyAction::Single(Action::KeyWithModifier(
            KeyCode::Hid(HidKeyCode::Kc8),
            ModifierCombination::GUI
        )))
    );
    assert_eq!(
        keymap.action_at(KeyPos::new(Layer::Win as u8, 2, 11)),
        Some(k!(AudioVolUp))
    );
}

#[test]
fn test_rebuild_from_explicit_entries() {
    let keymap = keymap().unwrap();
    let rebuilt: KeyMap<ROW, COL, NUM_LAYER> =
        KeyMap::from_entries(keymap.positions(), TAP_DANCE_ACTIONS.len()).unwrap();
    assert!(keymap.positions().eq(rebuilt.positions()));
}

#[test]
fn test_keymap_needs_the_encoder_tap_dance() {
    assert_eq!(
        KeyMap::new(get_default_keymap(), 0).err(),
        Some(KeymapError::UnknownTapDance {
            pos: KeyPos::new(0, 0, 12),
            index: ENC_TAP
        })
    );
}
