//! Keyboard actions.
//!
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`KeyAction`] - What a key position does, stored in the keymap

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
    /// Tap dance action, references a tap dance by index.
    TapDance(u8),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Only valid for `Single` variant, returns `Action::No` for other variants.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    /// Index of the referenced tap dance, if this is a tap dance key
    pub fn tap_dance_index(&self) -> Option<u8> {
        match self {
            KeyAction::TapDance(i) => Some(*i),
            _ => None,
        }
    }

    /// Layers which can be switched to by this key.
    ///
    /// A key references at most two layers: one per side of a tap-hold.
    pub fn referenced_layers(&self) -> [Option<u8>; 2] {
        match self {
            KeyAction::Single(a) => [a.layer(), None],
            KeyAction::TapHold(tap, hold) => [tap.layer(), hold.layer()],
            _ => [None, None],
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including media keys.
    Key(KeyCode),
    /// Modifier Combination, used as the hold action of home row mods.
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Activate a layer and deactivate all other layers(except default layer)
    LayerToggleOnly(u8),
    /// Triggers the user macro at the 'index'.
    TriggerMacro(u8),
}

impl Action {
    /// Target layer of a layer action
    pub fn layer(&self) -> Option<u8> {
        match self {
            Action::LayerOn(l) | Action::LayerToggleOnly(l) => Some(*l),
            _ => None,
        }
    }
}
