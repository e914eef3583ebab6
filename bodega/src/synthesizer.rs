//! Turns a custom keycode press into host output.

use bodega_types::custom_keycode::CustomKeycode;

use crate::emission::{EmissionSpec, EmissionTable};
use crate::guard::{GuardedAction, guarded_emit};
use crate::host::KeyboardHost;

/// Emits custom keycodes as described by an [`EmissionTable`].
pub struct Synthesizer<'a> {
    table: &'a EmissionTable,
}

impl<'a> Synthesizer<'a> {
    pub fn new(table: &'a EmissionTable) -> Self {
        Self { table }
    }

    /// Send the output of `keycode` and return the spec that was used.
    ///
    /// Shift is sampled once, before any modifier is cleared. Every tap goes through
    /// the modifier guard, so the registers are the same before and after.
    pub async fn synthesize<H: KeyboardHost>(&self, host: &mut H, keycode: CustomKeycode) -> Option<EmissionSpec> {
        let Some(spec) = self.table.get(keycode) else {
            warn!("No emission for {:?}", keycode);
            return None;
        };
        let spec = *spec.resolve(host.shift_active());
        debug!("Synthesizing {:?}: {:?}", keycode, spec);

        match spec {
            EmissionSpec::Tap(stroke) => guarded_emit(host, GuardedAction::Tap(stroke)).await,
            EmissionSpec::Literal { text, guarded: true } => guarded_emit(host, GuardedAction::Text(text)).await,
            EmissionSpec::Literal { text, guarded: false } => host.send_text(text).await,
            EmissionSpec::Sequence { taps, interval } => {
                for (i, stroke) in taps.iter().enumerate() {
                    if i > 0 {
                        host.delay(interval).await;
                    }
                    guarded_emit(host, GuardedAction::Tap(*stroke)).await;
                }
            }
            // `resolve` never returns a conditional
            EmissionSpec::Conditional { .. } => return None,
        }
        Some(spec)
    }
}
