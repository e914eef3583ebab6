//! # Bodega Types
//!
//! Fundamental type definitions shared by the bodega keymap and its user layer core.
//!
//! ## Modules
//!
//! - [`action`] - Keymap cell contents and the [`action::KeyStroke`] unit used by emissions
//! - [`custom_keycode`] - Custom keycodes, the actions the user layer synthesizes itself
//! - [`keycode`] - HID keycodes used by the keymap
//! - [`layer`] - Layers and the host's layer bitset
//! - [`led_indicator`] - LED indicator states reported by the host
//! - [`modifier`] - Modifier combinations and the HID modifier byte
//!
//! The types carry no behavior beyond conversions. Everything that reacts to
//! key events or layer changes lives in the `bodega` crate.

#![no_std]

pub mod action;
pub mod custom_keycode;
pub mod keycode;
pub mod layer;
pub mod led_indicator;
pub mod modifier;
