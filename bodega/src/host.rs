//! Interfaces to the firmware runtime the user layer is loaded into.
//!
//! The host owns the matrix scan, the layer stack, the modifier registers and the HID
//! transport. The user layer only reads a [`HostState`] snapshot and drives the host
//! through [`KeyboardHost`], [`RgbIndicator`] and [`LabelDisplay`].

use bodega_types::action::KeyStroke;
use bodega_types::layer::LayerState;
use bodega_types::led_indicator::LedIndicator;
use bodega_types::modifier::HidModifiers;
use embassy_time::Duration;

use crate::presentation::{Hsv, LightingMode};

/// Snapshot of the host state that the presentation depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HostState {
    /// Layers toggled on or currently held
    pub layer_state: LayerState,
    /// Default layer bitset
    pub default_layer_state: LayerState,
    /// Persistent modifier register
    pub modifiers: HidModifiers,
    /// One-shot modifier register
    pub oneshot_modifiers: HidModifiers,
    /// Lock LEDs reported by the computer
    pub led_indicator: LedIndicator,
}

impl HostState {
    /// Shift is held or armed as a one-shot modifier
    pub fn shift_active(&self) -> bool {
        (self.modifiers | self.oneshot_modifiers).has_shift()
    }

    /// All enabled layers, default layer included
    pub fn effective_layers(&self) -> LayerState {
        self.layer_state | self.default_layer_state
    }
}

/// Keyboard side of the host: modifier registers and HID output.
///
/// All methods are called from the host's event callback, one event at a time.
pub trait KeyboardHost {
    /// Current persistent modifiers
    fn modifiers(&self) -> HidModifiers;

    /// Current one-shot modifiers
    fn oneshot_modifiers(&self) -> HidModifiers;

    fn set_modifiers(&mut self, modifiers: HidModifiers);

    fn set_oneshot_modifiers(&mut self, modifiers: HidModifiers);

    /// Send a keyboard report reflecting the current registers. No-op if nothing changed.
    async fn send_keyboard_report(&mut self);

    /// Press and release `stroke` as one unit, its modifiers included
    async fn tap(&mut self, stroke: KeyStroke);

    /// Send raw text, bypassing the physical key mapping
    async fn send_text(&mut self, text: &str);

    /// Wait without processing further events
    async fn delay(&mut self, duration: Duration);

    /// Shift is held or armed as a one-shot modifier
    fn shift_active(&self) -> bool {
        (self.modifiers() | self.oneshot_modifiers()).has_shift()
    }
}

/// RGB underglow driver.
pub trait RgbIndicator {
    async fn set_hsv(&mut self, hsv: Hsv, mode: LightingMode);
}

/// Secondary display able to show a short text line.
pub trait LabelDisplay {
    async fn write_label(&mut self, label: &str);
}
