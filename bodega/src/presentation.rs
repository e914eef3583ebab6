//! Presentation mapper: the indicator color and display label for the current state.

use bodega_types::layer::Layer;
use heapless::String;

use crate::config::{DisplayConfig, LightingConfig};
use crate::host::{HostState, LabelDisplay, RgbIndicator};
use crate::layer_tracker::active_layer;

/// Longest label written to the display, prefix included
pub const LABEL_CAPACITY: usize = 32;

/// Indicator colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Magenta,
    Green,
    Yellow,
    Blue,
    White,
}

impl Color {
    /// The color as a hue/saturation/value triple on the 0..=255 scale
    pub const fn to_hsv(self) -> Hsv {
        match self {
            Color::Red => Hsv::new(0, 255, 255),
            Color::Magenta => Hsv::new(213, 255, 255),
            Color::Green => Hsv::new(85, 255, 255),
            Color::Yellow => Hsv::new(43, 255, 255),
            Color::Blue => Hsv::new(170, 255, 255),
            Color::White => Hsv::new(0, 0, 255),
        }
    }

    /// Color of a layer when nothing uppercase is pending
    pub const fn for_layer(layer: Layer) -> Self {
        match layer {
            Layer::Base => Color::White,
            Layer::Symbol => Color::Blue,
            Layer::Numpad => Color::Green,
            Layer::System => Color::Magenta,
            Layer::Navigation => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Animation of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightingMode {
    Static,
    /// Pulsing brightness, higher `speed` pulses faster
    Breathing { speed: u8 },
}

/// What the indicator and the display show.
///
/// Always computed from scratch, two equal inputs give two equal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VisualState {
    pub color: Color,
    pub label: &'static str,
}

/// Map the active layer and the uppercase sources to a visual state.
///
/// Shift or caps lock turns the indicator red whatever the layer, the label always
/// names the layer.
pub const fn compute_visual(layer: Layer, shift_active: bool, caps_lock: bool) -> VisualState {
    let color = if shift_active || caps_lock {
        Color::Red
    } else {
        Color::for_layer(layer)
    };
    VisualState {
        color,
        label: layer.name(),
    }
}

/// Visual state for a host snapshot
pub fn visual_for(state: &HostState) -> VisualState {
    compute_visual(active_layer(state), state.shift_active(), state.led_indicator.caps_lock())
}

/// `prefix` followed by the layer label, the bare label if both don't fit
pub fn render_label(prefix: &str, visual: &VisualState) -> String<LABEL_CAPACITY> {
    let mut text = String::new();
    let fits = text.push_str(prefix).is_ok() && text.push_str(visual.label).is_ok();
    if !fits {
        warn!("Display label doesn't fit, dropping prefix");
        text.clear();
        // Layer names are far shorter than the capacity
        let _ = text.push_str(visual.label);
    }
    text
}

/// Pushes visual states to the indicator and the display.
pub struct Presenter<R: RgbIndicator, D: LabelDisplay> {
    lighting_config: LightingConfig,
    display_config: DisplayConfig,
    rgb: R,
    label: D,
}

impl<R: RgbIndicator, D: LabelDisplay> Presenter<R, D> {
    pub fn new(lighting: LightingConfig, display: DisplayConfig, rgb: R, label: D) -> Self {
        Self {
            lighting_config: lighting,
            display_config: display,
            rgb,
            label,
        }
    }

    /// Compute the visual state of `state` and push it to both sinks
    pub async fn refresh(&mut self, state: &HostState) -> VisualState {
        let visual = visual_for(state);
        self.show(&visual).await;
        visual
    }

    pub async fn show(&mut self, visual: &VisualState) {
        #[cfg(feature = "rgblight")]
        if self.lighting_config.enabled {
            self.rgb.set_hsv(visual.color.to_hsv(), self.lighting_config.mode).await;
        }

        #[cfg(feature = "oled")]
        if self.display_config.enabled && self.display_config.is_master {
            self.label.write_label(&render_label(self.display_config.prefix, visual)).await;
        }
    }

    pub fn indicator(&self) -> &R {
        &self.rgb
    }

    pub fn display(&self) -> &D {
        &self.label
    }

    /// Give back the sinks
    pub fn into_inner(self) -> (R, D) {
        (self.rgb, self.label)
    }
}
