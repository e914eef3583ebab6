//! Modifier guard.
//!
//! Every synthesized key is sent with the modifier registers cleared, so a held AltGr
//! or an armed one-shot shift can't leak into it, and the registers are put back
//! afterwards so nothing stays stuck.

use bodega_types::action::KeyStroke;
use bodega_types::modifier::HidModifiers;
use embassy_futures::yield_now;

use crate::host::KeyboardHost;

/// Modifier registers saved while a synthesized key is being sent.
///
/// Created by [`ModifierSnapshot::take`], which also clears the registers. Must be given
/// back with [`ModifierSnapshot::restore`].
#[must_use = "the saved modifiers must be restored"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModifierSnapshot {
    pub modifiers: HidModifiers,
    pub oneshot_modifiers: HidModifiers,
}

impl ModifierSnapshot {
    /// Save both modifier registers, clear them and flush the cleared state
    pub async fn take<H: KeyboardHost>(host: &mut H) -> Self {
        let snapshot = Self {
            modifiers: host.modifiers(),
            oneshot_modifiers: host.oneshot_modifiers(),
        };
        host.set_modifiers(HidModifiers::new());
        host.set_oneshot_modifiers(HidModifiers::new());
        host.send_keyboard_report().await;
        yield_now().await;
        snapshot
    }

    /// Write the saved registers back and flush them
    pub async fn restore<H: KeyboardHost>(self, host: &mut H) {
        host.set_modifiers(self.modifiers);
        host.set_oneshot_modifiers(self.oneshot_modifiers);
        host.send_keyboard_report().await;
        yield_now().await;
    }
}

/// Output sent between the two flushes of the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GuardedAction<'a> {
    Tap(KeyStroke),
    Text(&'a str),
}

/// Send `action` with both modifier registers cleared, then restore them.
///
/// The host sees: clear flush, the action's own reports, restore flush.
pub async fn guarded_emit<H: KeyboardHost>(host: &mut H, action: GuardedAction<'_>) {
    let snapshot = ModifierSnapshot::take(host).await;
    match action {
        GuardedAction::Tap(stroke) => host.tap(stroke).await,
        GuardedAction::Text(text) => host.send_text(text).await,
    }
    snapshot.restore(host).await;
}
