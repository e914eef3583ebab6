//! The keymap of the bodega board.
//!
//! A 58-key split layout on a 5x14 grid. The alpha rows use columns 0-5 and 8-13,
//! the thumb row columns 3-10. Cells with no switch are `No`.

use bodega_types::action::KeyAction;
use bodega_types::layer::{Layer, LayerState};
use bodega_types::modifier::ModifierCombination;
use strum::EnumCount;

use crate::{a, cu, k, layer, mo, tg, wm};

pub const BOARD_ROWS: usize = 5;
pub const BOARD_COLS: usize = 14;
pub const BOARD_LAYERS: usize = Layer::COUNT;

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; BOARD_COLS]; BOARD_ROWS]; BOARD_LAYERS] = [
    layer!([
        [k!(Escape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), a!(No), a!(No), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Backspace)],
        [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), a!(No), a!(No), k!(Y), k!(U), k!(I), k!(O), k!(P), cu!(AsterSym)],
        [k!(LShift), k!(A), k!(S), k!(D), k!(F), k!(G), a!(No), a!(No), k!(H), k!(J), k!(K), k!(L), cu!(EsNtil), k!(Delete)],
        [k!(LCtrl), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(LeftBracket), k!(RightBracket), k!(N), k!(M), k!(Comma), k!(Dot), cu!(MinusUnder), k!(RShift)],
        [a!(No), a!(No), a!(No), k!(LAlt), k!(LGui), mo!(Symbol), k!(Space), k!(Enter), mo!(Navigation), tg!(Numpad), tg!(System), a!(No), a!(No), a!(No)]
    ]),
    layer!([
        [cu!(SymBacktick), cu!(SymTilde), cu!(SymLt), cu!(SymGt), cu!(SymLbrc), cu!(SymRbrc), a!(No), a!(No), cu!(SymLcbr), cu!(SymRcbr), cu!(SymPipe), cu!(SymBsls), cu!(SymAt), cu!(SymSlash)],
        [cu!(SymInitA), cu!(Bktick3Sym), cu!(SquoSym), cu!(DquoSym), cu!(AsterSym), k!(CapsLock), a!(No), a!(No), cu!(SymKcColn), cu!(EsIques), cu!(EsQues), cu!(EsIexcl), wm!(Kc1, ModifierCombination::LSHIFT), cu!(SymInitG)],
        [cu!(SymCaret), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), cu!(MacroYaku)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
    ]),
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), k!(Kc7), k!(Kc8), k!(Kc9), cu!(SlashSym), cu!(AsterSym), a!(No)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), k!(Kc4), k!(Kc5), k!(Kc6), cu!(MinusSym), cu!(PlusSym), a!(No)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), k!(Kc1), k!(Kc2), k!(Kc3), cu!(EqlSym), k!(Comma), a!(No)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), k!(Kc0), k!(Dot), a!(No), a!(No), a!(No)],
        [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Enter), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
    ]),
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), k!(AudioVolDown), k!(AudioMute), k!(AudioVolUp), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(Transparent), wm!(Tab, ModifierCombination::LGUI), wm!(S, ModifierCombination::LSHIFT.union(ModifierCombination::LGUI)), wm!(L, ModifierCombination::LGUI), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
    ]),
    layer!([
        [k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), a!(No), a!(No), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), k!(Home), k!(PageDown), k!(PageUp), k!(End), a!(No)],
        [k!(LShift), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), k!(Left), k!(Down), k!(Up), k!(Right), a!(No)],
        [k!(LCtrl), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No)]
    ]),
];

/// Read access to a layered keymap.
///
/// Borrowed from qmk: every `(layer, row, col)` holds an action, `Transparent` falls
/// through to the next enabled layer below.
#[derive(Clone, Copy)]
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
}

/// The keymap compiled into the firmware
pub fn board_keymap() -> KeyMap<'static, BOARD_ROWS, BOARD_COLS, BOARD_LAYERS> {
    KeyMap::new(&KEYMAP)
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub const fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        Self { layers }
    }

    /// The action stored at a position, `None` outside the grid
    pub fn action_at(&self, layer: usize, row: usize, col: usize) -> Option<KeyAction> {
        self.layers.get(layer)?.get(row)?.get(col).copied()
    }

    /// The action a press at `(row, col)` triggers.
    ///
    /// Walks the enabled layers from the highest down, skipping `Transparent`. The lowest
    /// layer checked is the default layer.
    pub fn resolve(&self, layer_state: LayerState, default_layer: Layer, row: usize, col: usize) -> KeyAction {
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            let is_default = layer_idx == default_layer.index() as usize;
            if layer_state.contains_index(layer_idx as u8) || is_default {
                match layer.get(row).and_then(|r| r.get(col)) {
                    Some(KeyAction::Transparent) => {}
                    Some(action) => return *action,
                    None => return KeyAction::No,
                }
            }

            if is_default {
                break;
            }
        }

        KeyAction::No
    }

    /// Every cell with its `(layer, row, col)` position
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize, KeyAction)> + '_ {
        self.layers.iter().enumerate().flat_map(|(l, layer)| {
            layer
                .iter()
                .enumerate()
                .flat_map(move |(r, row)| row.iter().enumerate().map(move |(c, action)| (l, r, c, *action)))
        })
    }
}
