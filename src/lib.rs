//! Keymaps and per-layer RGB indicator logic for a pair of 4x12 MIT-layout
//! ortholinear keyboards (an MK47 with per-key RGB and a BM40 that only uses
//! whole-matrix modes).
//!
//! Matrix scanning, debouncing, layer resolution and USB HID all belong to
//! [`keyberon`]; this crate holds the static key tables plus the two lighting
//! callbacks the firmware binary wires into its refresh and layer-change
//! paths. Both callbacks take the lighting surface as an explicit
//! [`rgb::RgbMatrix`] argument, so they run unmodified on the host for tests.

#![no_std]
#![warn(clippy::pedantic)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod bm40;
pub mod layer;
pub mod mk47;
pub mod rgb;

/// Key matrix rows, shared by both boards.
pub const MATRIX_ROWS: usize = 4;
/// Key matrix columns, shared by both boards.
pub const MATRIX_COLS: usize = 12;

/// Key actions handled by the firmware binary rather than by keyberon.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomAction {
    /// Reboot into the bootloader.
    Reset,
    /// Toggle the RGB matrix on or off.
    RgbToggle,
    RgbBrightnessUp,
    RgbBrightnessDown,
}
