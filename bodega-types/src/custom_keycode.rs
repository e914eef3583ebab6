use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// First keycode value the host leaves to user code (`SAFE_RANGE`).
pub const USER_KEYCODE_BASE: u16 = 0x7E40;

/// Keycodes whose output is synthesized by the user layer instead of being relayed by the host.
///
/// The names follow the characters they produce on an ES-LatAm host layout. Values are
/// consecutive from [`USER_KEYCODE_BASE`], so a variant doubles as an index into a table.
#[repr(u16)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumCount,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// `ñ`, or `Ñ` while shift is held
    EsNtil = USER_KEYCODE_BASE,
    /// `Ñ`
    EsNtilCap,
    /// `¿`
    EsIques,
    /// `¡`
    EsIexcl,
    /// `?`
    EsQues,

    /// `` ` ``
    SymBacktick,
    /// `~`
    SymTilde,
    /// `<`
    SymLt,
    /// `>`
    SymGt,
    /// `[`
    SymLbrc,
    /// `]`
    SymRbrc,
    /// `{`
    SymLcbr,
    /// `}`
    SymRcbr,
    /// `|`
    SymPipe,
    /// `\`
    SymBsls,
    /// `@`
    SymAt,
    /// `/`
    SymSlash,
    /// `¬`
    SymInitA,
    /// `°`
    SymInitG,
    /// `:`
    SymKcColn,
    /// `^`, typed as dead circumflex followed by space
    SymCaret,

    /// `=`
    EqlSym,
    /// `-`
    MinusSym,
    /// `/`
    SlashSym,
    /// `*`
    AsterSym,
    /// `+`
    PlusSym,
    /// `-`, or `_` while shift is held
    MinusUnder,

    /// `"`
    DquoSym,
    /// `'`
    SquoSym,
    /// ```` ``` ````
    Bktick3Sym,

    /// Ctrl+Shift+F12, toggles the drop-down terminal
    MacroYaku,
}

impl CustomKeycode {
    /// Position of the keycode in a table indexed from [`USER_KEYCODE_BASE`]
    pub const fn index(self) -> usize {
        (self as u16 - USER_KEYCODE_BASE) as usize
    }

    /// Look up a custom keycode by its raw 16-bit value
    pub fn from_raw(raw: u16) -> Option<Self> {
        Self::from_repr(raw)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}
