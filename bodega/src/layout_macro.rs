/// Create one keymap layer from rows of actions
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Key(HidKeyCode::A)`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Key($crate::types::keycode::HidKeyCode::$k)
    };
}

/// Create a key sent with a modifier combination. For example, `wm!(Tab, ModifierCombination::LGUI)`
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::KeyWithModifier($crate::types::keycode::HidKeyCode::$x, $m)
    };
}

/// Create a bare action, `a!(No)` or `a!(Transparent)`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(Symbol)` activates the symbol layer while held.
#[macro_export]
macro_rules! mo {
    ($x: ident) => {
        $crate::types::action::KeyAction::LayerOn($crate::types::layer::Layer::$x.index())
    };
}

/// Create a layer toggle action. For example, `tg!(Numpad)`
#[macro_export]
macro_rules! tg {
    ($x: ident) => {
        $crate::types::action::KeyAction::LayerToggle($crate::types::layer::Layer::$x.index())
    };
}

/// Create a custom key handled by the user layer. For example, `cu!(EsNtil)`
#[macro_export]
macro_rules! cu {
    ($x: ident) => {
        $crate::types::action::KeyAction::Custom($crate::types::custom_keycode::CustomKeycode::$x)
    };
}
