use core::ops::BitOr;

use bitfield_struct::bitfield;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::keycode::HidKeyCode;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl ModifierCombination {
    pub const CTRL: Self = Self::new().with_ctrl(true);
    pub const SHIFT: Self = Self::new().with_shift(true);
    pub const ALT: Self = Self::new().with_alt(true);
    pub const GUI: Self = Self::new().with_gui(true);
    pub const RIGHT: Self = Self::new().with_right(true);

    pub const LCTRL: Self = Self::CTRL;
    pub const LSHIFT: Self = Self::SHIFT;
    pub const LALT: Self = Self::ALT;
    pub const LGUI: Self = Self::GUI;
    pub const RCTRL: Self = Self::CTRL.union(Self::RIGHT);
    pub const RSHIFT: Self = Self::SHIFT.union(Self::RIGHT);
    pub const RALT: Self = Self::ALT.union(Self::RIGHT);
    pub const RGUI: Self = Self::GUI.union(Self::RIGHT);

    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// `BitOr` usable in const context, so keymaps can combine modifiers at compile time.
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    pub const fn is_empty(self) -> bool {
        self.into_bits() & 0b1111 == 0
    }

    /// Convert modifier combination to a list of modifier keycodes.
    /// Returns a list of modifiers keycodes, and the length of the list.
    pub fn to_modifier_keycodes(self) -> ([HidKeyCode; 4], usize) {
        let (ctrl, shift, alt, gui) = if self.right() {
            (HidKeyCode::RCtrl, HidKeyCode::RShift, HidKeyCode::RAlt, HidKeyCode::RGui)
        } else {
            (HidKeyCode::LCtrl, HidKeyCode::LShift, HidKeyCode::LAlt, HidKeyCode::LGui)
        };

        let mut keycodes = [HidKeyCode::No; 4];
        let mut i = 0;
        for (enabled, keycode) in [(self.ctrl(), ctrl), (self.shift(), shift), (self.alt(), alt), (self.gui(), gui)] {
            if enabled {
                keycodes[i] = keycode;
                i += 1;
            }
        }

        (keycodes, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keycodes_left() {
        let (keycodes, n) = (ModifierCombination::GUI | ModifierCombination::SHIFT).to_modifier_keycodes();
        assert_eq!(n, 2);
        assert_eq!(&keycodes[..n], &[HidKeyCode::LShift, HidKeyCode::LGui]);
    }

    #[test]
    fn test_modifier_keycodes_right() {
        let (keycodes, n) = ModifierCombination::RCTRL.to_modifier_keycodes();
        assert_eq!(n, 1);
        assert_eq!(keycodes[0], HidKeyCode::RCtrl);
    }

    #[test]
    fn test_empty_combination() {
        assert!(ModifierCombination::new().is_empty());
        assert!(ModifierCombination::RIGHT.is_empty());
        assert!(!ModifierCombination::ALT.is_empty());
        assert_eq!(ModifierCombination::new().to_modifier_keycodes().1, 0);
    }
}
