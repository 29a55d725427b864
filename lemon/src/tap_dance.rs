use crate::registry::KeyRegistry;

/// State of a tap dance gesture.
///
/// Created by the tap dance driver when the first tap arrives and dropped after
/// [`TapDanceAction::reset`] returns. Callbacks only read it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceState {
    /// Number of consecutive taps
    pub count: u8,
    /// The key is still held down
    pub pressed: bool,
    /// Another key was pressed during the gesture
    pub interrupted: bool,
    /// The finished callback has been called
    pub finished: bool,
}

impl TapDanceState {
    pub const fn new() -> Self {
        Self {
            count: 0,
            pressed: false,
            interrupted: false,
            finished: false,
        }
    }

    pub const fn with_count(count: u8) -> Self {
        Self { count, ..Self::new() }
    }

    /// Record one more tap
    pub fn tap(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

/// Tap counts a gesture is classified into
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapCount {
    One,
    Two,
    /// Three taps or more
    Many,
}

impl TapCount {
    /// Anything which is neither one nor two taps counts as `Many`
    pub const fn from_count(count: u8) -> Self {
        match count {
            1 => TapCount::One,
            2 => TapCount::Two,
            _ => TapCount::Many,
        }
    }
}

/// Tap dance callback, it receives the gesture state and the register/unregister primitives
pub type TapDanceFn = fn(&TapDanceState, &mut dyn KeyRegistry);

/// A tap dance made of user callbacks.
///
/// `on_each_tap` is called on every tap, `on_finished` once the gesture is resolved and `on_reset`
/// after that, with the same state. The driver guarantees `on_reset` always follows `on_finished`.
#[derive(Copy, Clone)]
pub struct TapDanceAction {
    pub on_each_tap: Option<TapDanceFn>,
    pub on_finished: Option<TapDanceFn>,
    pub on_reset: Option<TapDanceFn>,
}

impl TapDanceAction {
    pub const fn advanced(
        on_each_tap: Option<TapDanceFn>,
        on_finished: Option<TapDanceFn>,
        on_reset: Option<TapDanceFn>,
    ) -> Self {
        Self {
            on_each_tap,
            on_finished,
            on_reset,
        }
    }

    pub fn each_tap(&self, state: &TapDanceState, registry: &mut dyn KeyRegistry) {
        if let Some(f) = self.on_each_tap {
            f(state, registry);
        }
    }

    pub fn finished(&self, state: &TapDanceState, registry: &mut dyn KeyRegistry) {
        if let Some(f) = self.on_finished {
            f(state, registry);
        }
    }

    pub fn reset(&self, state: &TapDanceState, registry: &mut dyn KeyRegistry) {
        if let Some(f) = self.on_reset {
            f(state, registry);
        }
    }
}
