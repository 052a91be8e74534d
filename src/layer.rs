//! Layers and the active-layer bitset.
//!
//! keyberon owns the real layer stack; the lighting hooks only ever see a
//! snapshot of which layers are active, packed into a [`LayerState`] the same
//! way the firmware packs its `layer_state` word.

/// Logical layers, ordered by priority. `Game` exists only on the MK47.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Layer {
    Base = 0,
    Lower = 1,
    Raise = 2,
    Adjust = 3,
    Game = 4,
}

impl Layer {
    /// Number of defined layers.
    pub const COUNT: usize = 5;
}

/// Set of active layers, one bit per [`Layer`].
///
/// An empty set means only the base layer is showing. Bits above `Game` are
/// not defined layers and are ignored by [`LayerState::highest`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerState(u8);

impl LayerState {
    const DEFINED: u8 = (1 << Layer::COUNT) - 1;

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, layer: Layer) -> bool {
        self.0 & (1 << layer as u8) != 0
    }

    #[must_use]
    pub const fn with(self, layer: Layer) -> Self {
        Self(self.0 | 1 << layer as u8)
    }

    #[must_use]
    pub const fn without(self, layer: Layer) -> Self {
        Self(self.0 & !(1 << layer as u8))
    }

    /// The highest-priority active layer, used for display decisions.
    ///
    /// Falls back to `Base` when the set is empty or contains only undefined
    /// bits, so callers never have to handle an unknown layer.
    #[must_use]
    pub const fn highest(self) -> Layer {
        let bits = self.0 & Self::DEFINED;
        if bits >= 1 << Layer::Game as u8 {
            Layer::Game
        } else if bits >= 1 << Layer::Adjust as u8 {
            Layer::Adjust
        } else if bits >= 1 << Layer::Raise as u8 {
            Layer::Raise
        } else if bits >= 1 << Layer::Lower as u8 {
            Layer::Lower
        } else {
            Layer::Base
        }
    }

    /// Tri-layer composition: `adjust` is active exactly while both `lower`
    /// and `raise` are held.
    #[must_use]
    pub const fn update_tri_layer(self, lower: Layer, raise: Layer, adjust: Layer) -> Self {
        if self.contains(lower) && self.contains(raise) {
            self.with(adjust)
        } else {
            self.without(adjust)
        }
    }
}
