use crate::keymap::KeymapError;

/// Number of layers in the Work Board keymap
pub const NUM_LAYER: usize = 5;

/// Named layers, in stacking order: a higher layer shadows the lower ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Layer {
    /// Magic Sturdy alphas
    Base = 0,
    Sym = 1,
    Num = 2,
    /// Window management, lighting and volume
    Win = 3,
    /// Function keys and bootloader
    Fun = 4,
}

impl Layer {
    pub const ALL: [Layer; NUM_LAYER] = [Layer::Base, Layer::Sym, Layer::Num, Layer::Win, Layer::Fun];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Sym => "sym",
            Layer::Num => "num",
            Layer::Win => "win",
            Layer::Fun => "fun",
        }
    }
}

impl TryFrom<u8> for Layer {
    type Error = KeymapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Layer::ALL
            .get(value as usize)
            .copied()
            .ok_or(KeymapError::LayerOutOfRange { layer: value })
    }
}
