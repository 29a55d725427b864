use heapless::Vec;

use crate::types::keycode::KeyCode;

/// The register/unregister primitives of the firmware.
///
/// Registering a key marks it as held in the next HID report, unregistering releases it.
/// Implementations must return immediately: they are called from tap dance callbacks
/// inside the scan loop.
pub trait KeyRegistry {
    fn register_key(&mut self, key: KeyCode);
    fn unregister_key(&mut self, key: KeyCode);
}

/// A key change sent to the host
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyChange {
    Pressed(KeyCode),
    Released(KeyCode),
}

/// Fixed size [`KeyRegistry`] which keeps the currently held keys and a log of all changes.
///
/// `N` is the maximum number of keys held at once, `E` the number of changes which are recorded.
pub struct HeldKeys<const N: usize = 8, const E: usize = 32> {
    held: Vec<KeyCode, N>,
    changes: Vec<KeyChange, E>,
}

impl<const N: usize, const E: usize> Default for HeldKeys<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const E: usize> HeldKeys<N, E> {
    pub const fn new() -> Self {
        Self {
            held: Vec::new(),
            changes: Vec::new(),
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn held(&self) -> &[KeyCode] {
        &self.held
    }

    pub fn changes(&self) -> &[KeyChange] {
        &self.changes
    }

    pub fn press_count(&self, key: KeyCode) -> usize {
        self.changes.iter().filter(|c| **c == KeyChange::Pressed(key)).count()
    }

    pub fn release_count(&self, key: KeyCode) -> usize {
        self.changes.iter().filter(|c| **c == KeyChange::Released(key)).count()
    }

    /// Nothing is held, and every press has a matching release
    pub fn is_balanced(&self) -> bool {
        self.held.is_empty()
            && self.changes.iter().all(|c| match c {
                KeyChange::Pressed(k) | KeyChange::Released(k) => self.press_count(*k) == self.release_count(*k),
            })
    }

    /// Forget all recorded changes, held keys are kept
    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }

    fn record(&mut self, change: KeyChange) {
        if self.changes.push(change).is_err() {
            warn!("Key change log is full, dropping {:?}", change);
        }
    }
}

impl<const N: usize, const E: usize> KeyRegistry for HeldKeys<N, E> {
    fn register_key(&mut self, key: KeyCode) {
        if !self.is_held(key) && self.held.push(key).is_err() {
            warn!("Too many keys held, dropping {:?}", key);
            return;
        }
        trace!("Register {:?}", key);
        self.record(KeyChange::Pressed(key));
    }

    fn unregister_key(&mut self, key: KeyCode) {
        match self.held.iter().position(|k| *k == key) {
            Some(index) => {
                self.held.remove(index);
                trace!("Unregister {:?}", key);
                self.record(KeyChange::Released(key));
            }
            None => warn!("Unregister {:?}, which is not held", key),
        }
    }
}
