//! Emissions for an ES-LatAm host layout (XKB `latam`).
//!
//! On that layout `{ }` are AltGr+7/0, `[ ]` AltGr+8/9, `\` AltGr+`'`, `@` AltGr+Q and `/`
//! Shift+7. Everything is typed through physical keys, no unicode input method is needed.

use bodega_types::action::KeyStroke;
use bodega_types::custom_keycode::CustomKeycode;
use bodega_types::keycode::HidKeyCode;
use bodega_types::modifier::ModifierCombination;
use strum::EnumCount;

use crate::emission::{DEFAULT_SEQUENCE_INTERVAL, EmissionSpec, EmissionTable};
use crate::error::ConfigError;

const fn plain(key: HidKeyCode) -> KeyStroke {
    KeyStroke::key(key)
}

const fn shifted(key: HidKeyCode) -> KeyStroke {
    KeyStroke::key(key).shifted()
}

const fn altgr(key: HidKeyCode) -> KeyStroke {
    KeyStroke::key(key).altgr()
}

const fn tap(stroke: KeyStroke) -> EmissionSpec {
    EmissionSpec::Tap(stroke)
}

static NTIL_LOWER: EmissionSpec = tap(plain(HidKeyCode::Semicolon));
static NTIL_UPPER: EmissionSpec = tap(shifted(HidKeyCode::Semicolon));
static MINUS: EmissionSpec = tap(plain(HidKeyCode::Slash));
static UNDERSCORE: EmissionSpec = tap(shifted(HidKeyCode::Slash));

/// Dead circumflex, then space to print it on its own
static CARET_TAPS: [KeyStroke; 2] = [altgr(HidKeyCode::LeftBracket), plain(HidKeyCode::Space)];
static TRIPLE_BACKTICK_TAPS: [KeyStroke; 3] = [altgr(HidKeyCode::NonusHash); 3];

/// Every custom keycode and what it types
#[rustfmt::skip]
pub static ES_LATAM_EMISSIONS: [(CustomKeycode, EmissionSpec); CustomKeycode::COUNT] = [
    (CustomKeycode::EsNtil, EmissionSpec::Conditional { if_shift: &NTIL_UPPER, otherwise: &NTIL_LOWER }),
    (CustomKeycode::EsNtilCap, tap(shifted(HidKeyCode::Semicolon))),
    (CustomKeycode::EsIques, tap(plain(HidKeyCode::Equal))),
    (CustomKeycode::EsIexcl, tap(KeyStroke::with_modifiers(HidKeyCode::Kc1, ModifierCombination::RSHIFT.union(ModifierCombination::RALT)))),
    (CustomKeycode::EsQues, tap(shifted(HidKeyCode::Minus))),

    (CustomKeycode::SymBacktick, tap(altgr(HidKeyCode::NonusHash))),
    (CustomKeycode::SymTilde, tap(altgr(HidKeyCode::Kc4))),
    (CustomKeycode::SymLt, tap(plain(HidKeyCode::NonusBackslash))),
    (CustomKeycode::SymGt, tap(shifted(HidKeyCode::NonusBackslash))),
    (CustomKeycode::SymLbrc, tap(altgr(HidKeyCode::Kc8))),
    (CustomKeycode::SymRbrc, tap(altgr(HidKeyCode::Kc9))),
    (CustomKeycode::SymLcbr, tap(altgr(HidKeyCode::Kc7))),
    (CustomKeycode::SymRcbr, tap(altgr(HidKeyCode::Kc0))),
    (CustomKeycode::SymPipe, tap(altgr(HidKeyCode::Kc1))),
    (CustomKeycode::SymBsls, tap(altgr(HidKeyCode::Minus))),
    (CustomKeycode::SymAt, tap(altgr(HidKeyCode::Q))),
    (CustomKeycode::SymSlash, tap(shifted(HidKeyCode::Kc7))),
    (CustomKeycode::SymInitA, tap(altgr(HidKeyCode::Grave))),
    (CustomKeycode::SymInitG, tap(shifted(HidKeyCode::Grave))),
    (CustomKeycode::SymKcColn, tap(shifted(HidKeyCode::Dot))),
    (CustomKeycode::SymCaret, EmissionSpec::Sequence { taps: &CARET_TAPS, interval: DEFAULT_SEQUENCE_INTERVAL }),

    (CustomKeycode::EqlSym, tap(shifted(HidKeyCode::Kc0))),
    (CustomKeycode::MinusSym, tap(plain(HidKeyCode::Slash))),
    (CustomKeycode::SlashSym, tap(shifted(HidKeyCode::Kc7))),
    (CustomKeycode::AsterSym, tap(plain(HidKeyCode::KpAsterisk))),
    (CustomKeycode::PlusSym, tap(plain(HidKeyCode::KpPlus))),
    (CustomKeycode::MinusUnder, EmissionSpec::Conditional { if_shift: &UNDERSCORE, otherwise: &MINUS }),

    (CustomKeycode::DquoSym, tap(altgr(HidKeyCode::LeftBracket))),
    (CustomKeycode::SquoSym, tap(plain(HidKeyCode::LeftBracket))),
    (CustomKeycode::Bktick3Sym, EmissionSpec::Sequence { taps: &TRIPLE_BACKTICK_TAPS, interval: DEFAULT_SEQUENCE_INTERVAL }),

    (CustomKeycode::MacroYaku, tap(KeyStroke::with_modifiers(HidKeyCode::F12, ModifierCombination::LCTRL.union(ModifierCombination::LSHIFT)))),
];

/// The validated ES-LatAm emission table
pub fn es_latam_table() -> Result<EmissionTable, ConfigError> {
    EmissionTable::new(&ES_LATAM_EMISSIONS)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_es_latam_table_is_complete() {
        let table = es_latam_table().unwrap();
        assert_eq!(
            table.get(CustomKeycode::SymAt),
            Some(&EmissionSpec::Tap(KeyStroke::with_modifiers(HidKeyCode::Q, ModifierCombination::RALT)))
        );
        assert_eq!(table.get(CustomKeycode::Bktick3Sym).and_then(|s| s.tap_count()), Some(3));
    }
}
