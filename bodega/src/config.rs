use crate::presentation::LightingMode;

/// Breathing speed of the layer indicator
pub const DEFAULT_BREATHING_SPEED: u8 = 60;

/// The config struct for the bodega user layer.
///
/// 1. `LightingConfig`: how the layer indicator is driven.
/// 2. `DisplayConfig`: where and how the layer label is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UserConfig {
    pub lighting: LightingConfig,
    pub display: DisplayConfig,
}

/// Config for the RGB layer indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightingConfig {
    pub enabled: bool,
    pub mode: LightingMode,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: LightingMode::Breathing {
                speed: DEFAULT_BREATHING_SPEED,
            },
        }
    }
}

/// Config for the layer label display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub enabled: bool,
    /// Only the master half of a split keyboard writes the label
    pub is_master: bool,
    /// Text written before the layer name
    pub prefix: &'static str,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            is_master: true,
            prefix: "Layer: ",
        }
    }
}
