//! Lighting interface and painting helpers.
//!
//! The RGB matrix itself (animation engine, brightness, persistence) lives in
//! the firmware framework. The hooks in the board modules drive it through
//! the [`RgbMatrix`] trait, which keeps them free of globals and lets the
//! tests substitute a recording fake.

use keyberon::action::Action;
use keyberon::layout::Layers;
use smart_leds::RGB8;

use crate::layer::Layer;

/// Whole-matrix lighting modes the hooks switch between.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RgbMode {
    /// No effect; individual LED writes are the only light.
    Off,
    /// Single color over the whole matrix.
    SolidColor,
    /// Animated rainbow chevron sweeping across the board.
    RainbowMovingChevron,
}

/// Hue/saturation/value triple for whole-matrix modes.
///
/// `val` is the nominal full value; the framework scales it by the global
/// brightness it persists.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

pub const HSV_RED: Hsv = Hsv { hue: 0, sat: 255, val: 255 };
pub const HSV_ORANGE: Hsv = Hsv { hue: 28, sat: 255, val: 255 };
pub const HSV_WHITE: Hsv = Hsv { hue: 0, sat: 0, val: 255 };
pub const HSV_BLACK: Hsv = Hsv { hue: 0, sat: 0, val: 0 };

pub const RED: RGB8 = RGB8 { r: 0xFF, g: 0x00, b: 0x00 };
pub const ORANGE: RGB8 = RGB8 { r: 0xFF, g: 0x80, b: 0x00 };
pub const WHITE: RGB8 = RGB8 { r: 0xFF, g: 0xFF, b: 0xFF };

/// The framework-owned lighting surface, passed explicitly into the hooks.
///
/// Mode and color changes are the non-persisting kind; writing them to
/// EEPROM (or not) stays the framework's business.
pub trait RgbMatrix {
    /// Select the whole-matrix effect.
    fn set_mode(&mut self, mode: RgbMode);

    /// Set the base color for whole-matrix effects.
    fn set_hsv(&mut self, hsv: Hsv);

    /// Physical LED under a matrix cell, if the cell has one.
    fn led_index(&self, row: u8, col: u8) -> Option<u8>;

    /// Overwrite a single LED for the current refresh.
    fn set_color(&mut self, index: u8, color: RGB8);

    /// Write a cell by coordinate, skipping cells with no backing LED.
    fn set_color_at(&mut self, row: u8, col: u8, color: RGB8) {
        if let Some(index) = self.led_index(row, col) {
            self.set_color(index, color);
        }
    }
}

/// Paint every key of `layer` that actually produces something.
///
/// Cells holding the transparent marker or the unused-cell filler are
/// skipped, as are cells with no backing LED. A layer index outside the
/// table is a no-op. The scan is O(rows x cols) per refresh, which is fine
/// for a few dozen keys.
pub fn paint_layer_keys<const C: usize, const R: usize, const L: usize, T: 'static>(
    layers: &Layers<C, R, L, T>,
    layer: Layer,
    color: RGB8,
    rgb: &mut impl RgbMatrix,
) {
    let table = match layers.get(layer as usize) {
        Some(table) => table,
        None => return,
    };
    for (row, actions) in table.iter().enumerate() {
        for (col, action) in actions.iter().enumerate() {
            if matches!(action, Action::NoOp | Action::Trans) {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            rgb.set_color_at(row as u8, col as u8, color);
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use smart_leds::RGB8;

    use super::{Hsv, RgbMatrix, RgbMode};
    use crate::{MATRIX_COLS, MATRIX_ROWS};

    pub(crate) const LED_COUNT: usize = 47;

    /// MK47 wiring: one LED per key, row-major, nothing under the right half
    /// of the 2u spacebar at (3, 6).
    const LED_MAP: [[Option<u8>; MATRIX_COLS]; MATRIX_ROWS] = [
        [
            Some(0), Some(1), Some(2), Some(3), Some(4), Some(5),
            Some(6), Some(7), Some(8), Some(9), Some(10), Some(11),
        ],
        [
            Some(12), Some(13), Some(14), Some(15), Some(16), Some(17),
            Some(18), Some(19), Some(20), Some(21), Some(22), Some(23),
        ],
        [
            Some(24), Some(25), Some(26), Some(27), Some(28), Some(29),
            Some(30), Some(31), Some(32), Some(33), Some(34), Some(35),
        ],
        [
            Some(36), Some(37), Some(38), Some(39), Some(40), Some(41),
            None, Some(42), Some(43), Some(44), Some(45), Some(46),
        ],
    ];

    /// Recording fake for the hooks' side effects.
    pub(crate) struct TestMatrix {
        pub mode: Option<RgbMode>,
        pub hsv: Option<Hsv>,
        pub colors: [Option<RGB8>; LED_COUNT],
    }

    impl TestMatrix {
        pub fn new() -> Self {
            Self {
                mode: None,
                hsv: None,
                colors: [None; LED_COUNT],
            }
        }

        pub fn color_at(&self, row: usize, col: usize) -> Option<RGB8> {
            LED_MAP[row][col].and_then(|index| self.colors[index as usize])
        }

        pub fn painted(&self) -> usize {
            self.colors.iter().filter(|color| color.is_some()).count()
        }
    }

    impl RgbMatrix for TestMatrix {
        fn set_mode(&mut self, mode: RgbMode) {
            self.mode = Some(mode);
        }

        fn set_hsv(&mut self, hsv: Hsv) {
            self.hsv = Some(hsv);
        }

        fn led_index(&self, row: u8, col: u8) -> Option<u8> {
            LED_MAP[row as usize][col as usize]
        }

        fn set_color(&mut self, index: u8, color: RGB8) {
            self.colors[index as usize] = Some(color);
        }
    }
}
