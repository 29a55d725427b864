//! Media controls on the encoder click.
//!
//! One click plays/pauses, two clicks skip to the next track, three or more go back to the previous one.

use crate::registry::KeyRegistry;
use crate::tap_dance::{TapCount, TapDanceAction, TapDanceState};
use crate::types::keycode::{HidKeyCode, KeyCode};

/// Tap dance index of the encoder click
pub const ENC_TAP: u8 = 0;

/// Registered tap dances, indexed by `td!(n)`
pub static TAP_DANCE_ACTIONS: [TapDanceAction; 1] =
    [TapDanceAction::advanced(None, Some(dance_enc_finished), Some(dance_enc_reset))];

/// The media key sent for a gesture. Both press and release go through here,
/// so the released key is always the one which was pressed.
pub const fn encoder_media_key(taps: TapCount) -> KeyCode {
    match taps {
        TapCount::One => KeyCode::Hid(HidKeyCode::MediaPlayPause),
        TapCount::Two => KeyCode::Hid(HidKeyCode::MediaNextTrack),
        TapCount::Many => KeyCode::Hid(HidKeyCode::MediaPrevTrack),
    }
}

pub fn dance_enc_finished(state: &TapDanceState, registry: &mut dyn KeyRegistry) {
    let key = encoder_media_key(TapCount::from_count(state.count));
    debug!("Encoder tap dance finished after {} taps, press {:?}", state.count, key);
    registry.register_key(key);
}

pub fn dance_enc_reset(state: &TapDanceState, registry: &mut dyn KeyRegistry) {
    let key = encoder_media_key(TapCount::from_count(state.count));
    debug!("Encoder tap dance reset after {} taps, release {:?}", state.count, key);
    registry.unregister_key(key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{HeldKeys, KeyChange};

    const MPLY: KeyCode = KeyCode::Hid(HidKeyCode::MediaPlayPause);
    const MNXT: KeyCode = KeyCode::Hid(HidKeyCode::MediaNextTrack);
    const MPRV: KeyCode = KeyCode::Hid(HidKeyCode::MediaPrevTrack);

    #[test]
    fn test_media_key_per_tap_count() {
        assert_eq!(encoder_media_key(TapCount::One), MPLY);
        assert_eq!(encoder_media_key(TapCount::Two), MNXT);
        assert_eq!(encoder_media_key(TapCount::Many), MPRV);
    }

    #[test]
    fn test_finished_presses_reset_releases() {
        for (count, key) in [(1, MPLY), (2, MNXT), (3, MPRV), (4, MPRV), (5, MPRV), (10, MPRV), (u8::MAX, MPRV)] {
            let state = TapDanceState::with_count(count);
            let mut keys: HeldKeys = HeldKeys::new();

            dance_enc_finished(&state, &mut keys);
            assert_eq!(keys.held(), &[key], "{} taps", count);

            dance_enc_reset(&state, &mut keys);
            assert_eq!(keys.changes(), &[KeyChange::Pressed(key), KeyChange::Released(key)]);
            assert!(keys.is_balanced(), "{} taps", count);
        }
    }

    #[test]
    fn test_registered_as_enc_tap() {
        let action = TAP_DANCE_ACTIONS[ENC_TAP as usize];
        assert!(action.on_each_tap.is_none());

        let state = TapDanceState::with_count(2);
        let mut keys: HeldKeys = HeldKeys::new();
        action.each_tap(&state, &mut keys);
        action.finished(&state, &mut keys);
        assert!(keys.is_held(MNXT));
        action.reset(&state, &mut keys);
        assert!(keys.is_balanced());
    }
}
