use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// Lock LED state as reported by the host in the HID output report (HID spec 11.1).
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq, Serialize, Deserialize)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
}
