//! User layer of the bodega split keyboard.
//!
//! Custom keycodes that type ES-LatAm symbols through physical keys, a layer indicator
//! colored by the active layer (red while the next letter would be uppercase) and a
//! layer label on the OLED. The firmware runtime drives everything through the hooks
//! of [`UserLayer`].
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod dispatch;
pub mod emission;
pub mod error;
pub mod guard;
pub mod host;
pub mod keymap;
pub mod layer_tracker;
pub mod layout_macro;
pub mod presentation;
pub mod symbols;
pub mod synthesizer;
pub mod user;

pub use bodega_types as types;
pub use config::UserConfig;
pub use dispatch::ProcessResult;
pub use error::ConfigError;
pub use host::{HostState, KeyboardHost, LabelDisplay, RgbIndicator};
pub use user::UserLayer;
