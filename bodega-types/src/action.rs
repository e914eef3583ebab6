//! Keymap actions.
//!
//! A [`KeyAction`] is what one keymap cell holds: a plain key the host relays, a layer
//! operation the host performs, or a [`CustomKeycode`] the user layer synthesizes itself.
//! A [`KeyStroke`] is one key plus the modifiers sent with it, the unit of every tap.

use serde::{Deserialize, Serialize};

use crate::custom_keycode::CustomKeycode;
use crate::keycode::HidKeyCode;
use crate::modifier::ModifierCombination;

/// A key pressed and released together with a modifier combination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStroke {
    pub key: HidKeyCode,
    pub modifiers: ModifierCombination,
}

impl KeyStroke {
    /// A key without modifiers
    pub const fn key(key: HidKeyCode) -> Self {
        Self {
            key,
            modifiers: ModifierCombination::new(),
        }
    }

    pub const fn with_modifiers(key: HidKeyCode, modifiers: ModifierCombination) -> Self {
        Self { key, modifiers }
    }

    /// The same key with shift added, `S(kc)`
    pub const fn shifted(self) -> Self {
        Self {
            key: self.key,
            modifiers: self.modifiers.union(ModifierCombination::LSHIFT),
        }
    }

    /// The same key with AltGr added, `RALT(kc)`
    pub const fn altgr(self) -> Self {
        Self {
            key: self.key,
            modifiers: self.modifiers.union(ModifierCombination::RALT),
        }
    }
}

/// The action at a keymap position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action
    No,
    /// Transparent action, the next active layer below is checked
    Transparent,
    /// A key relayed by the host unchanged
    Key(HidKeyCode),
    /// A key relayed by the host with a modifier combination held
    KeyWithModifier(HidKeyCode, ModifierCombination),
    /// Enable a layer while the key is held
    LayerOn(u8),
    /// Toggle a layer on press
    LayerToggle(u8),
    /// A key synthesized by the user layer
    Custom(CustomKeycode),
}

impl KeyAction {
    /// The custom keycode behind this action, if any
    pub fn as_custom(self) -> Option<CustomKeycode> {
        match self {
            KeyAction::Custom(keycode) => Some(keycode),
            _ => None,
        }
    }
}

impl From<CustomKeycode> for KeyAction {
    fn from(keycode: CustomKeycode) -> Self {
        KeyAction::Custom(keycode)
    }
}
