#![allow(dead_code)]

use lemon::config::TapDancesConfig;
use lemon::registry::HeldKeys;
use lemon::tap_dance::TapDanceState;
use lemon::types::keycode::KeyCode;
use log::debug;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Result of a complete tap dance gesture
pub struct TapDanceRun {
    /// Keys held between the finished and the reset callback
    pub held_after_finished: Vec<KeyCode>,
    /// The registry once the gesture is over
    pub keys: HeldKeys,
}

/// Tap the tap dance key `index` `taps` times, then let the tapping term expire.
///
/// Drives the callbacks the way the firmware does: `each_tap` on every tap, then `finished` and `reset`
/// with the final state.
pub fn run_tap_dance(config: &TapDancesConfig, index: u8, taps: u8) -> TapDanceRun {
    let mut keys: HeldKeys = HeldKeys::new();
    let mut state = TapDanceState::new();

    for _ in 0..taps {
        state.tap();
        if let Some(action) = config.get(index) {
            action.each_tap(&state, &mut keys);
        }
    }
    debug!("Tapping term of {:?} expired after {} taps", config.tapping_term, state.count);

    state.finished = true;
    config.finished(index, &state, &mut keys);
    let held_after_finished = keys.held().to_vec();
    config.reset(index, &state, &mut keys);

    TapDanceRun {
        held_after_finished,
        keys,
    }
}
