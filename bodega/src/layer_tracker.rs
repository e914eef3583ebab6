//! Picks the one layer the presentation reflects.

use bodega_types::layer::{Layer, LayerState};
use strum::IntoEnumIterator;

use crate::host::HostState;

const KNOWN_LAYERS_MASK: u32 = (1 << <Layer as strum::EnumCount>::COUNT) - 1;

/// The highest enabled layer in `state`, `Base` when nothing else is enabled.
///
/// Later layers take priority: Navigation > System > Numpad > Symbol > Base. Bits above
/// the last declared layer are ignored.
pub fn highest_active_layer(state: LayerState) -> Layer {
    if state.bits() & !KNOWN_LAYERS_MASK != 0 {
        warn!("Ignoring unknown layer bits: {:#x}", state.bits() & !KNOWN_LAYERS_MASK);
    }

    Layer::iter().rev().find(|layer| state.contains(*layer)).unwrap_or(Layer::Base)
}

/// The active layer for a host snapshot, the default layer counts as enabled
pub fn active_layer(state: &HostState) -> Layer {
    highest_active_layer(state.effective_layers())
}
