pub mod common;

use bodega::dispatch::{ProcessResult, process_record};
use bodega::emission::{EmissionSpec, MIN_SEQUENCE_INTERVAL};
use bodega::synthesizer::Synthesizer;
use bodega::types::action::{KeyAction, KeyStroke};
use bodega::types::custom_keycode::CustomKeycode;
use bodega::types::keycode::HidKeyCode;
use bodega::types::modifier::{HidModifiers, ModifierCombination};
use embassy_futures::block_on;
use strum::IntoEnumIterator;

use crate::common::{HostOp, MockHost, altgr, shift, table};

fn press(host: &mut MockHost, keycode: CustomKeycode) -> ProcessResult {
    let synthesizer = Synthesizer::new(table());
    block_on(process_record(host, &synthesizer, KeyAction::Custom(keycode), true))
}

#[test]
fn test_ntil_follows_shift() {
    let mut host = MockHost::default();
    press(&mut host, CustomKeycode::EsNtil);
    assert_eq!(host.taps(), vec![KeyStroke::key(HidKeyCode::Semicolon)]);

    let mut host = MockHost::with_modifiers(shift(), HidModifiers::new());
    press(&mut host, CustomKeycode::EsNtil);
    assert_eq!(host.taps(), vec![KeyStroke::key(HidKeyCode::Semicolon).shifted()]);

    // One-shot shift counts too
    let mut host = MockHost::with_modifiers(HidModifiers::new(), shift());
    press(&mut host, CustomKeycode::EsNtil);
    assert_eq!(host.taps(), vec![KeyStroke::key(HidKeyCode::Semicolon).shifted()]);
}

#[test]
fn test_minus_under_follows_shift() {
    let mut host = MockHost::default();
    press(&mut host, CustomKeycode::MinusUnder);
    assert_eq!(host.taps(), vec![KeyStroke::key(HidKeyCode::Slash)]);

    let mut host = MockHost::with_modifiers(HidModifiers::new().with_right_shift(true), HidModifiers::new());
    press(&mut host, CustomKeycode::MinusUnder);
    assert_eq!(host.taps(), vec![KeyStroke::key(HidKeyCode::Slash).shifted()]);
}

#[test]
fn test_guarded_tap_sequence_of_operations() {
    let mut host = MockHost::with_modifiers(altgr(), shift());
    press(&mut host, CustomKeycode::SymAt);

    assert_eq!(
        host.ops,
        vec![
            HostOp::Flush {
                modifiers: HidModifiers::new(),
                oneshot: HidModifiers::new()
            },
            HostOp::Tap {
                stroke: KeyStroke::with_modifiers(HidKeyCode::Q, ModifierCombination::RALT),
                modifiers: HidModifiers::new()
            },
            HostOp::Flush {
                modifiers: altgr(),
                oneshot: shift()
            },
        ]
    );
    assert_eq!(host.modifiers, altgr());
    assert_eq!(host.oneshot, shift());
}

#[test]
fn test_every_keycode_restores_modifiers() {
    for bits in [0u8, 0b0000_0010, 0b0100_0000, 0b0010_0001, 0xFF] {
        for keycode in CustomKeycode::iter() {
            let modifiers = HidModifiers::from_bits(bits);
            let oneshot = HidModifiers::from_bits(!bits);
            let mut host = MockHost::with_modifiers(modifiers, oneshot);
            press(&mut host, keycode);

            assert_eq!(host.modifiers, modifiers, "{:?}", keycode);
            assert_eq!(host.oneshot, oneshot, "{:?}", keycode);
            for op in &host.ops {
                if let HostOp::Tap { modifiers, .. } = op {
                    assert!(modifiers.is_empty(), "{:?} leaked {:?}", keycode, modifiers);
                }
            }
        }
    }
}

#[test]
fn test_tap_specs_emit_exactly_one_tap() {
    let table = table();
    for keycode in CustomKeycode::iter() {
        let Some(EmissionSpec::Tap(stroke)) = table.get(keycode).map(|spec| *spec.resolve(false)) else {
            continue;
        };
        let mut host = MockHost::default();
        press(&mut host, keycode);
        assert_eq!(host.taps(), vec![stroke], "{:?}", keycode);
    }
}

#[test]
fn test_triple_backtick() {
    let mut host = MockHost::with_modifiers(shift(), HidModifiers::new());
    press(&mut host, CustomKeycode::Bktick3Sym);

    let backtick = KeyStroke::with_modifiers(HidKeyCode::NonusHash, ModifierCombination::RALT);
    assert_eq!(host.taps(), vec![backtick; 3]);
    assert_eq!(host.delays().len(), 2);
    assert!(host.delays().iter().all(|d| *d >= MIN_SEQUENCE_INTERVAL));

    // Delays sit between the guarded taps, never inside a guard
    let kinds: Vec<&str> = host
        .ops
        .iter()
        .map(|op| match op {
            HostOp::Flush { .. } => "flush",
            HostOp::Tap { .. } => "tap",
            HostOp::Text { .. } => "text",
            HostOp::Delay(_) => "delay",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "flush", "tap", "flush", "delay", "flush", "tap", "flush", "delay", "flush", "tap", "flush"
        ]
    );
    assert_eq!(host.modifiers, shift());
}

#[test]
fn test_caret_is_dead_key_then_space() {
    let mut host = MockHost::default();
    press(&mut host, CustomKeycode::SymCaret);
    assert_eq!(
        host.taps(),
        vec![
            KeyStroke::with_modifiers(HidKeyCode::LeftBracket, ModifierCombination::RALT),
            KeyStroke::key(HidKeyCode::Space),
        ]
    );
}

#[test]
fn test_custom_keys_are_handled() {
    for keycode in CustomKeycode::iter() {
        let mut host = MockHost::default();
        assert_eq!(press(&mut host, keycode), ProcessResult::Stop);
        assert!(!host.ops.is_empty());
    }
}

#[test]
fn test_custom_release_is_passed_to_host() {
    let synthesizer = Synthesizer::new(table());
    for keycode in CustomKeycode::iter() {
        let mut host = MockHost::with_modifiers(shift(), HidModifiers::new());
        let result = block_on(process_record(&mut host, &synthesizer, KeyAction::Custom(keycode), false));
        assert_eq!(result, ProcessResult::Continue, "{:?}", keycode);
        assert!(host.ops.is_empty());
        assert_eq!(host.modifiers, shift());
    }
}

#[test]
fn test_other_keys_pass_through() {
    let synthesizer = Synthesizer::new(table());
    let actions = [
        KeyAction::No,
        KeyAction::Transparent,
        KeyAction::Key(HidKeyCode::A),
        KeyAction::KeyWithModifier(HidKeyCode::Tab, ModifierCombination::LGUI),
        KeyAction::LayerOn(1),
        KeyAction::LayerToggle(2),
    ];
    for action in actions {
        for pressed in [true, false] {
            let mut host = MockHost::with_modifiers(shift(), HidModifiers::new());
            let result = block_on(process_record(&mut host, &synthesizer, action, pressed));
            assert_eq!(result, ProcessResult::Continue);
            assert!(host.ops.is_empty());
            assert_eq!(host.modifiers, shift());
        }
    }
}
