//! Entry point for key events coming from the host.

use bodega_types::action::KeyAction;

use crate::host::KeyboardHost;
use crate::synthesizer::Synthesizer;

/// Whether the host should still run its own handling for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// The event was handled here, skip the default handling
    Stop,
    /// Not ours, the host processes the event as usual
    Continue,
}

/// Handle one key transition.
///
/// Custom keycodes are synthesized on press. Releases and every other action are handed
/// back to the host untouched.
pub async fn process_record<H: KeyboardHost>(
    host: &mut H,
    synthesizer: &Synthesizer<'_>,
    action: KeyAction,
    pressed: bool,
) -> ProcessResult {
    if !pressed {
        return ProcessResult::Continue;
    }
    let Some(keycode) = action.as_custom() else {
        return ProcessResult::Continue;
    };

    synthesizer.synthesize(host, keycode).await;
    ProcessResult::Stop
}
