#![allow(dead_code)]

use bodega::emission::EmissionTable;
use bodega::host::{KeyboardHost, LabelDisplay, RgbIndicator};
use bodega::presentation::{Hsv, LightingMode};
use bodega::symbols::es_latam_table;
use bodega::types::action::KeyStroke;
use bodega::types::modifier::HidModifiers;
use embassy_time::Duration;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Everything the mock host is asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    /// A keyboard report with the registers at the time of the flush
    Flush { modifiers: HidModifiers, oneshot: HidModifiers },
    /// A tap, with the persistent register at the time of the tap
    Tap { stroke: KeyStroke, modifiers: HidModifiers },
    Text { text: String, modifiers: HidModifiers },
    Delay(Duration),
}

/// Host that records its output instead of sending it
#[derive(Debug, Default)]
pub struct MockHost {
    pub modifiers: HidModifiers,
    pub oneshot: HidModifiers,
    pub ops: Vec<HostOp>,
}

impl MockHost {
    pub fn with_modifiers(modifiers: HidModifiers, oneshot: HidModifiers) -> Self {
        Self {
            modifiers,
            oneshot,
            ops: Vec::new(),
        }
    }

    pub fn taps(&self) -> Vec<KeyStroke> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Tap { stroke, .. } => Some(*stroke),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::Delay(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl KeyboardHost for MockHost {
    fn modifiers(&self) -> HidModifiers {
        self.modifiers
    }

    fn oneshot_modifiers(&self) -> HidModifiers {
        self.oneshot
    }

    fn set_modifiers(&mut self, modifiers: HidModifiers) {
        self.modifiers = modifiers;
    }

    fn set_oneshot_modifiers(&mut self, modifiers: HidModifiers) {
        self.oneshot = modifiers;
    }

    async fn send_keyboard_report(&mut self) {
        self.ops.push(HostOp::Flush {
            modifiers: self.modifiers,
            oneshot: self.oneshot,
        });
    }

    async fn tap(&mut self, stroke: KeyStroke) {
        self.ops.push(HostOp::Tap {
            stroke,
            modifiers: self.modifiers | self.oneshot,
        });
    }

    async fn send_text(&mut self, text: &str) {
        self.ops.push(HostOp::Text {
            text: text.to_string(),
            modifiers: self.modifiers | self.oneshot,
        });
    }

    async fn delay(&mut self, duration: Duration) {
        self.ops.push(HostOp::Delay(duration));
    }
}

#[derive(Debug, Default)]
pub struct MockRgb {
    pub calls: Vec<(Hsv, LightingMode)>,
}

impl RgbIndicator for MockRgb {
    async fn set_hsv(&mut self, hsv: Hsv, mode: LightingMode) {
        self.calls.push((hsv, mode));
    }
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    pub labels: Vec<String>,
}

impl LabelDisplay for MockDisplay {
    async fn write_label(&mut self, label: &str) {
        self.labels.push(label.to_string());
    }
}

/// The built-in table, leaked so that it can back a `'static` synthesizer
pub fn table() -> &'static EmissionTable {
    Box::leak(Box::new(es_latam_table().unwrap()))
}

pub fn shift() -> HidModifiers {
    HidModifiers::new().with_left_shift(true)
}

pub fn altgr() -> HidModifiers {
    HidModifiers::new().with_right_alt(true)
}

