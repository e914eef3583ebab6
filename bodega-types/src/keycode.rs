use serde::{Deserialize, Serialize};
use strum::FromRepr;

/// Keycodes from the HID keyboard/keypad usage page (0x07) that the bodega keymap uses.
///
/// Media keys keep the values the host firmware uses internally, they are translated to
/// consumer page usages by the host transport.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// No key
    No = 0x00,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    Kc1 = 0x1E,
    Kc2 = 0x1F,
    Kc3 = 0x20,
    Kc4 = 0x21,
    Kc5 = 0x22,
    Kc6 = 0x23,
    Kc7 = 0x24,
    Kc8 = 0x25,
    Kc9 = 0x26,
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `'` and `?` on ES-LatAm, `-` on US
    Minus = 0x2D,
    /// `¿` and `¡` on ES-LatAm, `=` on US
    Equal = 0x2E,
    /// Dead acute on ES-LatAm, `[` on US
    LeftBracket = 0x2F,
    /// `+` and `*` on ES-LatAm, `]` on US
    RightBracket = 0x30,
    Backslash = 0x31,
    /// ISO key left of Enter, `}` and `]` on ES-LatAm
    NonusHash = 0x32,
    /// `ñ` and `Ñ` on ES-LatAm, `;` on US
    Semicolon = 0x33,
    Quote = 0x34,
    /// `|` and `°` on ES-LatAm
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    /// `-` and `_` on ES-LatAm, `/` on US
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,
    /// ISO key right of left shift, `<` and `>` on ES-LatAm
    NonusBackslash = 0x64,
    Application = 0x65,
    AudioMute = 0xA8,
    AudioVolUp = 0xA9,
    AudioVolDown = 0xAA,
    MediaNextTrack = 0xAB,
    MediaPrevTrack = 0xAC,
    MediaStop = 0xAD,
    MediaPlayPause = 0xAE,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    /// AltGr on ISO layouts
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl HidKeyCode {
    /// Returns `true` for the left and right shift keys
    pub fn is_shift(self) -> bool {
        matches!(self, HidKeyCode::LShift | HidKeyCode::RShift)
    }

    /// Returns `true` if the key changes what the uppercase indicator shows when released
    pub fn affects_uppercase(self) -> bool {
        self.is_shift() || self == HidKeyCode::CapsLock
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unknown_code_maps_to_no() {
        assert_eq!(HidKeyCode::from(0x04), HidKeyCode::A);
        assert_eq!(HidKeyCode::from(0xE6), HidKeyCode::RAlt);
        assert_eq!(HidKeyCode::from(0x90), HidKeyCode::No);
    }

    #[test]
    fn test_uppercase_keys() {
        assert!(HidKeyCode::LShift.affects_uppercase());
        assert!(HidKeyCode::RShift.affects_uppercase());
        assert!(HidKeyCode::CapsLock.affects_uppercase());
        assert!(!HidKeyCode::RAlt.affects_uppercase());
    }
}
