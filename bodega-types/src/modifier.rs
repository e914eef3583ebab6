use core::ops::{BitAnd, BitOr};

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// A modifier combination attached to a keycode, packed the same way the host firmware
/// packs `S()`, `RALT()`, `C()` into a 16-bit keycode.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
///
/// With the L/R bit set every modifier in the combination is the right-hand one, so
/// `RALT | LSHIFT` is sent as right alt + right shift.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_shift(true);
    pub const LALT: Self = Self::new().with_alt(true);
    pub const LGUI: Self = Self::new().with_gui(true);
    pub const RCTRL: Self = Self::new().with_right(true).with_ctrl(true);
    pub const RSHIFT: Self = Self::new().with_right(true).with_shift(true);
    /// AltGr
    pub const RALT: Self = Self::new().with_right(true).with_alt(true);
    pub const RGUI: Self = Self::new().with_right(true).with_gui(true);

    /// `const` version of `|`, usable in static tables.
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Get modifier hid report bits from modifier combination
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}

/// The modifier byte of a HID keyboard report, one bit per physical modifier key.
///
/// This is also the shape of the host's persistent and one-shot modifier registers.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}

impl HidModifiers {
    /// Either shift key
    pub const SHIFT_MASK: Self = Self::new().with_left_shift(true).with_right_shift(true);

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Returns `true` if left or right shift is set
    pub fn has_shift(self) -> bool {
        !(self & Self::SHIFT_MASK).is_empty()
    }
}

impl From<ModifierCombination> for HidModifiers {
    fn from(value: ModifierCombination) -> Self {
        value.to_hid_modifiers()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_right_bit_applies_to_all_modifiers() {
        let altgr_shift = ModifierCombination::RALT | ModifierCombination::LSHIFT;
        assert_eq!(
            altgr_shift.to_hid_modifiers(),
            HidModifiers::new().with_right_alt(true).with_right_shift(true)
        );
        assert_eq!(
            ModifierCombination::LSHIFT.to_hid_modifiers(),
            HidModifiers::new().with_left_shift(true)
        );
    }

    #[test]
    fn test_shift_detection() {
        assert!(HidModifiers::new().with_right_shift(true).has_shift());
        assert!(HidModifiers::new().with_left_shift(true).with_left_ctrl(true).has_shift());
        assert!(!HidModifiers::new().with_right_alt(true).has_shift());
        assert!(HidModifiers::new().is_empty());
    }
}
