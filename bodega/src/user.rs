//! The hooks the host calls into.

use bodega_types::action::KeyAction;
use bodega_types::layer::LayerState;

use crate::config::UserConfig;
use crate::dispatch::{ProcessResult, process_record};
use crate::emission::EmissionTable;
use crate::host::{HostState, KeyboardHost, LabelDisplay, RgbIndicator};
use crate::presentation::{Presenter, VisualState};
use crate::synthesizer::Synthesizer;

/// The user layer loaded into the host.
///
/// Holds no state of its own between events: every hook reads what it needs from the
/// host and the visual state is recomputed on each refresh.
pub struct UserLayer<'a, R: RgbIndicator, D: LabelDisplay> {
    synthesizer: Synthesizer<'a>,
    presenter: Presenter<R, D>,
}

impl<'a, R: RgbIndicator, D: LabelDisplay> UserLayer<'a, R, D> {
    /// Create the user layer.
    ///
    /// `table` is already validated, [`EmissionTable::new`] only builds tables covering every
    /// custom keycode, so any keymap is served.
    pub fn new(table: &'a EmissionTable, config: UserConfig, rgb: R, display: D) -> Self {
        Self {
            synthesizer: Synthesizer::new(table),
            presenter: Presenter::new(config.lighting, config.display, rgb, display),
        }
    }

    /// First paint after the keyboard is up
    pub async fn post_init(&mut self, state: &HostState) -> VisualState {
        info!("User layer initialized");
        self.presenter.refresh(state).await
    }

    /// Called for every key transition before the host handles it
    pub async fn process_record<H: KeyboardHost>(&mut self, host: &mut H, action: KeyAction, pressed: bool) -> ProcessResult {
        process_record(host, &self.synthesizer, action, pressed).await
    }

    /// Called after the host handled a key transition.
    ///
    /// Shift and caps lock keys repaint, so releasing shift turns the indicator back
    /// to the layer color.
    pub async fn post_process_record(&mut self, state: &HostState, action: KeyAction) -> Option<VisualState> {
        match action {
            KeyAction::Key(key) if key.affects_uppercase() => Some(self.presenter.refresh(state).await),
            _ => None,
        }
    }

    /// Called when the layer bitset changes, returns it unchanged
    pub async fn layer_state_set(&mut self, state: &HostState) -> LayerState {
        self.presenter.refresh(state).await;
        state.layer_state
    }

    /// Called when the lock LEDs change
    pub async fn led_update(&mut self, state: &HostState) -> VisualState {
        self.presenter.refresh(state).await
    }

    pub fn presenter(&self) -> &Presenter<R, D> {
        &self.presenter
    }

    pub fn into_presenter(self) -> Presenter<R, D> {
        self.presenter
    }
}
