use core::ops::BitOr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr};

/// Layers of the bodega keymap.
///
/// The discriminant is the layer index in the host's layer bitset. Declaration order is
/// also the priority order: when several layers are enabled, the one declared last wins.
#[repr(u8)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, FromRepr, EnumCount, EnumIter,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Symbol = 1,
    Numpad = 2,
    System = 3,
    Navigation = 4,
}

impl Layer {
    /// Short name shown on the secondary display
    pub const fn name(self) -> &'static str {
        match self {
            Layer::Base => "BASE",
            Layer::Symbol => "SYM",
            Layer::Numpad => "NUM",
            Layer::System => "SYS",
            Layer::Navigation => "NAV",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The host's layer bitset, bit `n` set means layer `n` is enabled (toggled on or held).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// A state with only `layer` enabled
    pub const fn single(layer: Layer) -> Self {
        Self(1 << layer.index())
    }

    pub const fn with(self, layer: Layer) -> Self {
        Self(self.0 | (1 << layer.index()))
    }

    pub const fn without(self, layer: Layer) -> Self {
        Self(self.0 & !(1 << layer.index()))
    }

    pub const fn contains(self, layer: Layer) -> bool {
        self.0 & (1 << layer.index()) != 0
    }

    /// Returns `true` if the bit at `index` is set, for indices outside [`Layer`] too
    pub const fn contains_index(self, index: u8) -> bool {
        index < 32 && self.0 & (1 << index) != 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayerState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl From<Layer> for LayerState {
    fn from(layer: Layer) -> Self {
        Self::single(layer)
    }
}
