//! Emission specs and the table mapping every custom keycode to one.

use bodega_types::action::KeyStroke;
use bodega_types::custom_keycode::CustomKeycode;
use embassy_time::Duration;
use strum::{EnumCount, IntoEnumIterator};

use crate::error::ConfigError;

/// Shortest wait allowed between the taps of a sequence, hosts drop faster repeats
pub const MIN_SEQUENCE_INTERVAL: Duration = Duration::from_millis(15);

/// Wait used by the built-in sequences
pub const DEFAULT_SEQUENCE_INTERVAL: Duration = Duration::from_millis(18);

/// What a custom keycode sends when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmissionSpec {
    /// One key with an explicit modifier combination
    Tap(KeyStroke),
    /// Raw text. `guarded` clears the ambient modifiers around it.
    Literal { text: &'static str, guarded: bool },
    /// Several taps, each guarded, `interval` apart
    Sequence {
        taps: &'static [KeyStroke],
        interval: Duration,
    },
    /// Pick a spec by the shift state at the moment of the press
    Conditional {
        if_shift: &'static EmissionSpec,
        otherwise: &'static EmissionSpec,
    },
}

impl EmissionSpec {
    /// Follow `Conditional` branches for the given shift state
    pub fn resolve(&self, shift_active: bool) -> &EmissionSpec {
        let mut spec = self;
        while let EmissionSpec::Conditional { if_shift, otherwise } = spec {
            spec = if shift_active { *if_shift } else { *otherwise };
        }
        spec
    }

    /// Number of key taps the spec sends, `None` for literals
    pub fn tap_count(&self) -> Option<usize> {
        match self {
            EmissionSpec::Tap(_) => Some(1),
            EmissionSpec::Literal { .. } => None,
            EmissionSpec::Sequence { taps, .. } => Some(taps.len()),
            EmissionSpec::Conditional { .. } => None,
        }
    }

    fn validate(&self, keycode: CustomKeycode) -> Result<(), ConfigError> {
        match self {
            EmissionSpec::Tap(_) | EmissionSpec::Literal { .. } => Ok(()),
            EmissionSpec::Sequence { taps, interval } => {
                if taps.is_empty() {
                    Err(ConfigError::EmptySequence(keycode))
                } else if *interval < MIN_SEQUENCE_INTERVAL {
                    Err(ConfigError::SequenceTooFast {
                        keycode,
                        interval_ms: interval.as_millis(),
                    })
                } else {
                    Ok(())
                }
            }
            EmissionSpec::Conditional { if_shift, otherwise } => {
                if_shift.validate(keycode)?;
                otherwise.validate(keycode)
            }
        }
    }
}

/// Emission specs indexed by custom keycode.
///
/// Only built through [`EmissionTable::new`], so every keycode has exactly one valid spec.
#[derive(Debug, Clone)]
pub struct EmissionTable {
    specs: [Option<EmissionSpec>; CustomKeycode::COUNT],
}

impl EmissionTable {
    /// Build the table from `(keycode, spec)` entries, rejecting gaps, duplicates and bad sequences
    pub fn new(entries: &[(CustomKeycode, EmissionSpec)]) -> Result<Self, ConfigError> {
        let mut specs = [None; CustomKeycode::COUNT];
        for (keycode, spec) in entries {
            spec.validate(*keycode)?;
            let slot = &mut specs[keycode.index()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateEmission(*keycode));
            }
            *slot = Some(*spec);
        }

        if let Some(missing) = CustomKeycode::iter().find(|keycode| specs[keycode.index()].is_none()) {
            return Err(ConfigError::MissingEmission(missing));
        }

        Ok(Self { specs })
    }

    /// The spec for `keycode`
    pub fn get(&self, keycode: CustomKeycode) -> Option<&EmissionSpec> {
        self.specs[keycode.index()].as_ref()
    }
}
