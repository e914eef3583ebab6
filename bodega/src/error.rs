use bodega_types::custom_keycode::CustomKeycode;

/// Errors found while validating the user layer tables at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A custom keycode has no emission spec
    MissingEmission(CustomKeycode),
    /// A custom keycode has more than one emission spec
    DuplicateEmission(CustomKeycode),
    /// A sequence emission has no taps
    EmptySequence(CustomKeycode),
    /// A sequence emission waits less than the minimum between taps
    SequenceTooFast { keycode: CustomKeycode, interval_ms: u64 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::MissingEmission(keycode) => write!(f, "no emission for {}", keycode.name()),
            ConfigError::DuplicateEmission(keycode) => write!(f, "more than one emission for {}", keycode.name()),
            ConfigError::EmptySequence(keycode) => write!(f, "empty sequence for {}", keycode.name()),
            ConfigError::SequenceTooFast { keycode, interval_ms } => write!(
                f,
                "sequence for {} waits {}ms between taps, minimum is {}ms",
                keycode.name(),
                interval_ms,
                crate::emission::MIN_SEQUENCE_INTERVAL.as_millis()
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::SequenceTooFast {
            keycode: CustomKeycode::Bktick3Sym,
            interval_ms: 5,
        };
        assert_eq!(
            format!("{}", err),
            "sequence for Bktick3Sym waits 5ms between taps, minimum is 15ms"
        );
        assert_eq!(
            format!("{}", ConfigError::MissingEmission(CustomKeycode::MacroYaku)),
            "no emission for MacroYaku"
        );
    }
}
