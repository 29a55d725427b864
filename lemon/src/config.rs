use embassy_time::Duration;

use crate::registry::KeyRegistry;
use crate::tap_dance::{TapDanceAction, TapDanceState};

/// Configurations for the keyboard
#[derive(Clone, Copy, Default)]
pub struct KeyboardConfig {
    pub matrix: MatrixConfig,
    pub behavior: BehaviorConfig,
}

/// Dimensions of the switch matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Configurations for actions behavior
#[derive(Clone, Copy, Default)]
pub struct BehaviorConfig {
    pub tap_dance: TapDancesConfig,
}

/// Registered tap dances, indexed by `KeyAction::TapDance(n)`
#[derive(Clone, Copy)]
pub struct TapDancesConfig {
    /// The gesture is resolved when no new tap arrives within this time
    pub tapping_term: Duration,
    pub actions: &'static [TapDanceAction],
}

impl Default for TapDancesConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(200),
            actions: &[],
        }
    }
}

impl TapDancesConfig {
    pub fn get(&self, index: u8) -> Option<&TapDanceAction> {
        self.actions.get(index as usize)
    }

    /// Run the finished callback of tap dance `index`
    pub fn finished(&self, index: u8, state: &TapDanceState, registry: &mut dyn KeyRegistry) {
        match self.get(index) {
            Some(action) => action.finished(state, registry),
            None => warn!("Tap dance {} is not registered", index),
        }
    }

    /// Run the reset callback of tap dance `index`
    pub fn reset(&self, index: u8, state: &TapDanceState, registry: &mut dyn KeyRegistry) {
        match self.get(index) {
            Some(action) => action.reset(state, registry),
            None => warn!("Tap dance {} is not registered", index),
        }
    }
}
