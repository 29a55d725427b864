use crate::layer::{Layer, NUM_LAYER};
use crate::types::action::KeyAction;
use crate::types::modifier::ModifierCombination;
use crate::{a, k, layout_lr, lt, mc, mo, mt, rgb, shifted, sk, td, to, wm};

use super::encoder::ENC_TAP;

pub const ROW: usize = 4;
pub const COL: usize = 13;

const GUI: ModifierCombination = ModifierCombination::GUI;
const CTRL: ModifierCombination = ModifierCombination::CTRL;
const GUI_SHIFT: ModifierCombination = ModifierCombination::GUI.union(ModifierCombination::SHIFT);

// Home row mods
const HOME_X: KeyAction = mt!(X, ModifierCombination::LGUI);
const HOME_S: KeyAction = mt!(S, ModifierCombination::LALT);
const HOME_T: KeyAction = mt!(T, ModifierCombination::LSHIFT);
const HOME_R: KeyAction = mt!(R, ModifierCombination::LCTRL);
const HOME_D: KeyAction = lt!(Layer::Sym, D);
const HOME_N: KeyAction = lt!(Layer::Sym, N);
const HOME_E: KeyAction = mt!(E, ModifierCombination::RCTRL);
const HOME_A: KeyAction = mt!(A, ModifierCombination::RSHIFT);
const HOME_I: KeyAction = mt!(I, ModifierCombination::LALT);
const HOME_SC: KeyAction = mt!(Semicolon, ModifierCombination::RGUI);
const NUM_G: KeyAction = lt!(Layer::Num, G);
const WIN_COL: KeyAction = lt!(Layer::Win, Semicolon);

/// User macros, the keymap only references them by index
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum UserMacro {
    /// Types `->`
    Arrow = 0,
    /// Searches the selected text
    SearchSelection = 1,
    /// tmux prefix followed by Escape
    TmuxEscape = 2,
    Username = 3,
}

const ARROW: KeyAction = mc!(UserMacro::Arrow);
const SRCHSEL: KeyAction = mc!(UserMacro::SearchSelection);
const TMUXESC: KeyAction = mc!(UserMacro::TmuxEscape);
const USRNAME: KeyAction = mc!(UserMacro::Username);

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Base layer: Magic Sturdy
        layout_lr!(
            k!(Grave), k!(V), k!(M), k!(L), k!(C), k!(P),
            k!(Tab), HOME_S, HOME_T, HOME_R, HOME_D, k!(Y),
            k!(Backspace), HOME_X, k!(K), k!(J), NUM_G, k!(W),
            WIN_COL, wm!(Tab, GUI), k!(Down), k!(Up), shifted!(Minus), k!(Space),

            k!(B), sk!(AltRepeat), k!(U), k!(O), k!(Q), k!(Slash), td!(ENC_TAP),
            k!(F), HOME_N, HOME_E, HOME_A, HOME_I, k!(Quote),
            k!(Z), k!(H), k!(Comma), k!(Dot), HOME_SC, k!(Enter),
            sk!(Repeat), k!(Escape), k!(Left), k!(Right), k!(Delete)
        ),
        // Symbols
        layout_lr!(
            TMUXESC, mo!(Layer::Fun), shifted!(Comma), shifted!(Dot), k!(Backslash), k!(Grave),
            wm!(Z, CTRL), shifted!(Kc1), k!(Minus), shifted!(Equal), k!(Equal), shifted!(Kc3),
            a!(Transparent), a!(Transparent), k!(Slash), shifted!(Kc8), shifted!(Kc6), USRNAME,
            a!(Transparent), a!(Transparent), a!(Transparent), wm!(Z, CTRL), wm!(C, CTRL), wm!(V, CTRL),

            shifted!(Kc7), ARROW, k!(LeftBracket), k!(RightBracket), SRCHSEL, a!(Transparent), a!(Transparent),
            shifted!(Backslash), shifted!(Semicolon), shifted!(Kc9), shifted!(Kc0), shifted!(Kc5), a!(Transparent),
            shifted!(Grave), shifted!(Kc4), shifted!(LeftBracket), shifted!(RightBracket), a!(Transparent), a!(Transparent),
            wm!(X, CTRL), k!(PageDown), k!(PageUp), a!(Transparent), k!(AudioMute)
        ),
        // Numbers
        layout_lr!(
            a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No),
            a!(Transparent), a!(No), k!(LAlt), k!(LShift), k!(LCtrl), a!(No),
            a!(Transparent), k!(LGui), a!(No), k!(LCtrl), a!(No), a!(No),
            a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), to!(Layer::Base), sk!(LayerLock),

            k!(Tab), k!(Kc8), k!(Kc9), k!(Kc4), shifted!(Equal), k!(Slash), a!(Transparent),
            shifted!(Semicolon), k!(Kc1), k!(Kc2), k!(Kc3), k!(Minus), shifted!(Kc8),
            k!(Comma), k!(Kc7), k!(Kc6), k!(Kc5), k!(Dot), a!(Transparent),
            k!(Kc0), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)
        ),
        // Window management, lighting and volume
        layout_lr!(
            rgb!(Toggle), rgb!(Default), rgb!(ModeForward), rgb!(HueUp), rgb!(SaturationUp), rgb!(ValueUp),
            a!(No), a!(No), k!(LAlt), k!(LShift), k!(LCtrl), a!(No),
            a!(No), k!(LGui), a!(No), a!(No), a!(No), a!(No),
            a!(No), a!(No), a!(No), a!(No), a!(No), wm!(Space, GUI),

            wm!(Tab, GUI), wm!(Kc8, GUI), wm!(Kc9, GUI), wm!(Kc4, GUI), a!(No), a!(No), a!(No),
            wm!(Left, GUI_SHIFT), wm!(Kc1, GUI), wm!(Kc2, GUI), wm!(Kc3, GUI), wm!(Right, GUI_SHIFT), a!(No),
            a!(No), wm!(Kc7, GUI), wm!(Kc6, GUI), wm!(Kc5, GUI), k!(AudioVolDown), k!(AudioVolUp),
            sk!(Repeat), a!(No), a!(No), a!(No), a!(No)
        ),
        // Function keys
        layout_lr!(
            a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No),
            a!(Transparent), a!(No), k!(LAlt), k!(LShift), k!(LCtrl), a!(No),
            a!(Transparent), k!(LGui), a!(No), a!(No), a!(No), a!(No),
            a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), to!(Layer::Base), sk!(LayerLock),

            a!(No), k!(F8), k!(F9), k!(F4), k!(F10), sk!(Bootloader), a!(Transparent),
            a!(No), k!(F1), k!(F2), k!(F3), k!(F11), a!(No),
            a!(No), k!(F7), k!(F6), k!(F5), k!(F12), a!(No),
            a!(No), a!(No), a!(No), a!(No), a!(No)
        ),
    ]
}
