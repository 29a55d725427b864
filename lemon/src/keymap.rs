use core::fmt;

use crate::types::action::KeyAction;

/// Position of a key in the keymap: `(layer, row, col)`
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub layer: u8,
    pub row: u8,
    pub col: u8,
}

impl KeyPos {
    pub const fn new(layer: u8, row: u8, col: u8) -> Self {
        Self { layer, row, col }
    }
}

/// Errors found while building or checking a keymap
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// Layer number is not in the keymap
    LayerOutOfRange { layer: u8 },
    /// Position is outside of the keymap
    PositionOutOfRange(KeyPos),
    /// Position is given more than once
    DuplicatePosition(KeyPos),
    /// Position is never given
    MissingPosition(KeyPos),
    /// Transparent key on the default layer, there's nothing to fall through to
    TransparentOnDefaultLayer(KeyPos),
    /// Layer action targets a layer which doesn't exist
    InvalidLayerReference { pos: KeyPos, layer: u8 },
    /// Tap dance key references a tap dance which isn't registered
    UnknownTapDance { pos: KeyPos, index: u8 },
    /// Keymap size doesn't match the matrix of the board
    MatrixMismatch { rows: usize, cols: usize },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerOutOfRange { layer } => write!(f, "layer {} is out of range", layer),
            KeymapError::PositionOutOfRange(pos) => write!(f, "position {:?} is out of range", pos),
            KeymapError::DuplicatePosition(pos) => write!(f, "position {:?} is defined twice", pos),
            KeymapError::MissingPosition(pos) => write!(f, "position {:?} is not defined", pos),
            KeymapError::TransparentOnDefaultLayer(pos) => {
                write!(f, "transparent key at {:?} on the default layer", pos)
            }
            KeymapError::InvalidLayerReference { pos, layer } => {
                write!(f, "key at {:?} references missing layer {}", pos, layer)
            }
            KeymapError::UnknownTapDance { pos, index } => {
                write!(f, "key at {:?} references unregistered tap dance {}", pos, index)
            }
            KeymapError::MatrixMismatch { rows, cols } => {
                write!(f, "keymap doesn't fit a {}x{} matrix", rows, cols)
            }
        }
    }
}

impl core::error::Error for KeymapError {}

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
/// A key is addressed by [`KeyPos`], the table is checked once when the keymap is built,
/// so every lookup afterwards is infallible for positions inside the matrix.
pub struct KeyMap<const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number, always active
    default_layer: u8,
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<ROW, COL, NUM_LAYER> {
    /// Build a keymap from a matrix of actions.
    ///
    /// `num_tap_dances` is the number of registered tap dances, `KeyAction::TapDance(i)` needs `i < num_tap_dances`.
    pub fn new(layers: [[[KeyAction; COL]; ROW]; NUM_LAYER], num_tap_dances: usize) -> Result<Self, KeymapError> {
        let keymap = KeyMap {
            layers,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
        };
        keymap.validate(num_tap_dances)?;
        Ok(keymap)
    }

    /// Build a keymap from an explicit `(position, action)` mapping.
    ///
    /// Every position of every layer must be given exactly once.
    pub fn from_entries<I>(entries: I, num_tap_dances: usize) -> Result<Self, KeymapError>
    where
        I: IntoIterator<Item = (KeyPos, KeyAction)>,
    {
        let mut layers = [[[KeyAction::No; COL]; ROW]; NUM_LAYER];
        let mut filled = [[[false; COL]; ROW]; NUM_LAYER];

        for (pos, action) in entries {
            let (l, r, c) = (pos.layer as usize, pos.row as usize, pos.col as usize);
            if l >= NUM_LAYER || r >= ROW || c >= COL {
                error!("Keymap entry out of range: {:?}", pos);
                return Err(KeymapError::PositionOutOfRange(pos));
            }
            if filled[l][r][c] {
                error!("Keymap entry defined twice: {:?}", pos);
                return Err(KeymapError::DuplicatePosition(pos));
            }
            filled[l][r][c] = true;
            layers[l][r][c] = action;
        }

        for (l, layer) in filled.iter().enumerate() {
            for (r, row) in layer.iter().enumerate() {
                if let Some(c) = row.iter().position(|f| !f) {
                    let pos = KeyPos::new(l as u8, r as u8, c as u8);
                    error!("Keymap entry missing: {:?}", pos);
                    return Err(KeymapError::MissingPosition(pos));
                }
            }
        }

        Self::new(layers, num_tap_dances)
    }

    fn validate(&self, num_tap_dances: usize) -> Result<(), KeymapError> {
        for (pos, action) in self.positions() {
            if pos.layer == self.default_layer && action.is_transparent() {
                error!("Transparent key on default layer: {:?}", pos);
                return Err(KeymapError::TransparentOnDefaultLayer(pos));
            }
            for layer in action.referenced_layers().into_iter().flatten() {
                if layer as usize >= NUM_LAYER {
                    error!("Key {:?} references missing layer {}", pos, layer);
                    return Err(KeymapError::InvalidLayerReference { pos, layer });
                }
            }
            if let Some(index) = action.tap_dance_index() {
                if index as usize >= num_tap_dances {
                    error!("Key {:?} references unregistered tap dance {}", pos, index);
                    return Err(KeymapError::UnknownTapDance { pos, index });
                }
            }
        }
        Ok(())
    }

    /// Check that the keymap has the same dimensions as the board's matrix
    pub fn check_matrix(&self, rows: usize, cols: usize) -> Result<(), KeymapError> {
        if rows != ROW || cols != COL {
            error!("Keymap is {}x{}, matrix is {}x{}", ROW, COL, rows, cols);
            return Err(KeymapError::MatrixMismatch { rows, cols });
        }
        Ok(())
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// The action stored at `pos`, `None` if `pos` is outside of the keymap
    pub fn action_at(&self, pos: KeyPos) -> Option<KeyAction> {
        self.layers
            .get(pos.layer as usize)?
            .get(pos.row as usize)?
            .get(pos.col as usize)
            .copied()
    }

    /// Iterate over every position in the keymap, layer by layer
    pub fn positions(&self) -> impl Iterator<Item = (KeyPos, KeyAction)> + '_ {
        self.layers.iter().enumerate().flat_map(|(l, layer)| {
            layer.iter().enumerate().flat_map(move |(r, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(c, action)| (KeyPos::new(l as u8, r as u8, c as u8), *action))
            })
        })
    }

    /// Number of positions in a layer, 0 if the layer doesn't exist
    pub fn position_count(&self, layer: u8) -> usize {
        self.positions().filter(|(pos, _)| pos.layer == layer).count()
    }

    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Activate a layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        debug!("Activate layer {}", layer_num);
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate a layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        debug!("Deactivate layer {}", layer_num);
        self.layer_state[layer_num as usize] = false;
    }

    /// Activate `layer_num` and deactivate all other layers, except the default layer
    pub fn layer_to(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        debug!("Move to layer {}", layer_num);
        self.layer_state = [false; NUM_LAYER];
        self.layer_state[layer_num as usize] = true;
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        layer_num == self.default_layer || self.layer_state.get(layer_num as usize).copied().unwrap_or(false)
    }

    /// The topmost active layer
    pub fn highest_active_layer(&self) -> u8 {
        self.layer_state
            .iter()
            .rposition(|&active| active)
            .map_or(self.default_layer, |l| (l as u8).max(self.default_layer))
    }

    /// Resolve the action at `(row, col)` through the layer stack.
    ///
    /// Returns the action of the topmost active layer which isn't transparent, together with that layer.
    /// `None` if `(row, col)` is outside of the matrix.
    pub fn resolve(&self, row: u8, col: u8) -> Option<(u8, KeyAction)> {
        if row as usize >= ROW || col as usize >= COL {
            return None;
        }
        for layer in (0..NUM_LAYER as u8).rev() {
            if !self.is_layer_active(layer) {
                continue;
            }
            let action = self.layers[layer as usize][row as usize][col as usize];
            if !action.is_transparent() {
                return Some((layer, action));
            }
        }

        // Unreachable for a validated keymap, the default layer holds no transparent key
        Some((self.default_layer, KeyAction::No))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::action::Action;
    use crate::{a, k, layer, mo, td, to};

    fn small_layers() -> [[[KeyAction; 2]; 1]; 2] {
        [layer!([[k!(A), mo!(1)]]), layer!([[a!(Transparent), to!(0)]])]
    }

    #[test]
    fn test_new_accepts_valid_keymap() {
        let keymap = KeyMap::new(small_layers(), 0).unwrap();
        assert_eq!(keymap.get_keymap_config(), (1, 2, 2));
        assert_eq!(keymap.action_at(KeyPos::new(1, 0, 1)), Some(to!(0)));
        assert_eq!(keymap.action_at(KeyPos::new(2, 0, 0)), None);
        assert_eq!(keymap.action_at(KeyPos::new(0, 1, 0)), None);
    }

    #[test]
    fn test_transparent_on_default_layer() {
        let layers = [layer!([[a!(Transparent), k!(B)]])];
        assert_eq!(
            KeyMap::new(layers, 0).err(),
            Some(KeymapError::TransparentOnDefaultLayer(KeyPos::new(0, 0, 0)))
        );
    }

    #[test]
    fn test_invalid_layer_reference() {
        let layers = [layer!([[k!(A), mo!(3)]]), layer!([[a!(No), a!(No)]])];
        assert_eq!(
            KeyMap::new(layers, 0).err(),
            Some(KeymapError::InvalidLayerReference {
                pos: KeyPos::new(0, 0, 1),
                layer: 3
            })
        );
    }

    #[test]
    fn test_unknown_tap_dance() {
        let layers = [layer!([[td!(0), td!(1)]])];
        assert!(KeyMap::new(layers, 2).is_ok());
        assert_eq!(
            KeyMap::new(layers, 1).err(),
            Some(KeymapError::UnknownTapDance {
                pos: KeyPos::new(0, 0, 1),
                index: 1
            })
        );
    }

    #[test]
    fn test_from_entries() {
        let entries = [
            (KeyPos::new(0, 0, 0), k!(A)),
            (KeyPos::new(0, 0, 1), mo!(1)),
            (KeyPos::new(1, 0, 1), to!(0)),
            (KeyPos::new(1, 0, 0), a!(Transparent)),
        ];
        let keymap: KeyMap<1, 2, 2> = KeyMap::from_entries(entries, 0).unwrap();
        assert_eq!(keymap.action_at(KeyPos::new(0, 0, 1)), Some(mo!(1)));
        assert_eq!(keymap.action_at(KeyPos::new(1, 0, 0)), Some(a!(Transparent)));
    }

    #[test]
    fn test_from_entries_rejects_incomplete_mapping() {
        let missing = [(KeyPos::new(0, 0, 0), k!(A))];
        assert_eq!(
            KeyMap::<1, 2, 1>::from_entries(missing, 0).err(),
            Some(KeymapError::MissingPosition(KeyPos::new(0, 0, 1)))
        );

        let duplicated = [(KeyPos::new(0, 0, 0), k!(A)), (KeyPos::new(0, 0, 0), k!(B))];
        assert_eq!(
            KeyMap::<1, 2, 1>::from_entries(duplicated, 0).err(),
            Some(KeymapError::DuplicatePosition(KeyPos::new(0, 0, 0)))
        );

        let outside = [(KeyPos::new(0, 0, 2), k!(A))];
        assert_eq!(
            KeyMap::<1, 2, 1>::from_entries(outside, 0).err(),
            Some(KeymapError::PositionOutOfRange(KeyPos::new(0, 0, 2)))
        );
    }

    #[test]
    fn test_resolve_through_layer_stack() {
        let mut keymap = KeyMap::new(small_layers(), 0).unwrap();
        assert_eq!(keymap.resolve(0, 1), Some((0, mo!(1))));

        keymap.activate_layer(1);
        assert_eq!(keymap.highest_active_layer(), 1);
        // Transparent falls through to the base layer
        assert_eq!(keymap.resolve(0, 0), Some((0, k!(A))));
        assert_eq!(keymap.resolve(0, 1), Some((1, KeyAction::Single(Action::LayerToggleOnly(0)))));

        keymap.deactivate_layer(1);
        assert!(!keymap.is_layer_active(1));
        assert_eq!(keymap.resolve(0, 1), Some((0, mo!(1))));
        assert_eq!(keymap.resolve(1, 0), None);
    }

    #[test]
    fn test_layer_to() {
        let mut keymap = KeyMap::new(small_layers(), 0).unwrap();
        keymap.layer_to(1);
        assert!(keymap.is_layer_active(1));
        keymap.layer_to(0);
        assert!(!keymap.is_layer_active(1));
        assert!(keymap.is_layer_active(0));
        // Invalid layers are ignored
        keymap.activate_layer(7);
        assert_eq!(keymap.highest_active_layer(), 0);
    }

    #[test]
    fn test_check_matrix() {
        let keymap = KeyMap::new(small_layers(), 0).unwrap();
        assert!(keymap.check_matrix(1, 2).is_ok());
        assert_eq!(
            keymap.check_matrix(4, 13),
            Err(KeymapError::MatrixMismatch { rows: 4, cols: 13 })
        );
    }
}
