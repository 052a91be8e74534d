//! MK47 keymap: five layers on a 47-key board with per-key RGB.
//!
//! On the base layer the framework runs its rainbow animation; on every other
//! layer the layer-change hook blanks the matrix and [`on_rgb_indicators`]
//! paints just the keys that do something, so the lit keys double as a
//! legend.

use keyberon::action::Action::{Custom, NoOp, Trans};
use keyberon::action::{d, k, l, m};
use keyberon::key_code::KeyCode::*;
use keyberon::layout::Layers;
use smart_leds::RGB8;

use crate::layer::{Layer, LayerState};
use crate::rgb::{paint_layer_keys, RgbMatrix, RgbMode, HSV_BLACK, HSV_RED, ORANGE, RED, WHITE};
use crate::CustomAction::{self, Reset, RgbBrightnessDown, RgbBrightnessUp, RgbToggle};
use crate::{MATRIX_COLS, MATRIX_ROWS};

const BASE: usize = Layer::Base as usize;
const LOWER: usize = Layer::Lower as usize;
const RAISE: usize = Layer::Raise as usize;
const GAME: usize = Layer::Game as usize;

/// Key table for all five layers.
///
/// The 2u spacebar has no switch under its right half; that cell, (3, 6), is
/// `NoOp` on every layer. Lower and Raise are momentary, composing Adjust via
/// the tri-layer rule in [`on_layer_state_change`].
#[rustfmt::skip]
pub static LAYERS: Layers<MATRIX_COLS, MATRIX_ROWS, { Layer::COUNT }, CustomAction> = [
    // Base: QWERTY with F24 as a push-to-talk spare.
    [
        [k(Tab),    k(Q),    k(W),   k(E),    k(R),     k(T),     k(Y), k(U),     k(I),     k(O),    k(P),      k(BSpace)],
        [k(Escape), k(A),    k(S),   k(D),    k(F),     k(G),     k(H), k(J),     k(K),     k(L),    k(SColon), k(Quote)],
        [k(LShift), k(Z),    k(X),   k(C),    k(V),     k(B),     k(N), k(M),     k(Comma), k(Dot),  k(Slash),  k(Enter)],
        [k(LCtrl),  k(LAlt), k(F24), k(LGui), l(LOWER), k(Space), NoOp, l(RAISE), k(Left),  k(Down), k(Up),     k(Right)],
    ],
    // Lower: shifted symbols and function keys.
    [
        [m(&[LShift, Grave].as_slice()), m(&[LShift, Kb1].as_slice()), m(&[LShift, Kb2].as_slice()), m(&[LShift, Kb3].as_slice()), m(&[LShift, Kb4].as_slice()), m(&[LShift, Kb5].as_slice()), m(&[LShift, Kb6].as_slice()), m(&[LShift, Kb7].as_slice()), m(&[LShift, Kb8].as_slice()), m(&[LShift, Kb9].as_slice()), m(&[LShift, Kb0].as_slice()), k(BSpace)],
        [k(Delete), k(F1), k(F2), k(F3), k(F4), k(F5), k(F6), m(&[LShift, Minus].as_slice()), m(&[LShift, Equal].as_slice()), m(&[LShift, LBracket].as_slice()), m(&[LShift, RBracket].as_slice()), m(&[LShift, Bslash].as_slice())],
        [Trans, k(F7), k(F8), k(F9), k(F10), k(F11), k(F12), d(BASE), Trans, Trans, Trans, Trans],
        [Trans, Trans, Trans, Trans, Trans, Trans, NoOp, Trans, Trans, Trans, Trans, Trans],
    ],
    // Raise: numbers and unshifted symbols.
    [
        [k(Grave),  k(Kb1), k(Kb2), k(Kb3), k(Kb4), k(Kb5), k(Kb6), k(Kb7),   k(Kb8),   k(Kb9),      k(Kb0),      k(BSpace)],
        [k(Delete), k(F1),  k(F2),  k(F3),  k(F4),  k(F5),  k(F6),  k(Minus), k(Equal), k(LBracket), k(RBracket), k(Bslash)],
        [Trans, k(F7), k(F8), k(F9), k(F10), k(F11), k(F12), d(BASE), Trans, Trans, Trans, Trans],
        [Trans, Trans, Trans, Trans, Trans, Trans, NoOp, Trans, Trans, Trans, Trans, Trans],
    ],
    // Adjust: lighting control, bootloader, media.
    [
        [Trans, Trans, Trans, Trans, Trans, Trans, Trans, d(GAME), Trans, Trans, Trans, Trans],
        [Trans, Trans, Trans, Trans, Trans, Trans, Trans, Custom(RgbToggle), Custom(RgbBrightnessUp), Custom(RgbBrightnessDown), Trans, Custom(Reset)],
        [Trans; MATRIX_COLS],
        [Trans, Trans, Trans, Trans, Trans, Trans, NoOp, Trans, k(MediaNextSong), k(MediaVolDown), k(MediaVolUp), k(MediaPlayPause)],
    ],
    // Game: everything falls through except dedicated momentary layer keys,
    // so toggled game mode keeps the base letters under the fingers.
    [
        [Trans; MATRIX_COLS],
        [Trans; MATRIX_COLS],
        [Trans; MATRIX_COLS],
        [Trans, Trans, Trans, Trans, l(LOWER), Trans, NoOp, l(RAISE), Trans, Trans, Trans, Trans],
    ],
];

const GAME_BLUE: RGB8 = RGB8 { r: 0x00, g: 0xB7, b: 0xFF };
const GAME_YELLOW: RGB8 = RGB8 { r: 0xFF, g: 0xEA, b: 0x00 };
const GAME_GREEN: RGB8 = RGB8 { r: 0x31, g: 0xFF, b: 0x00 };

const GAME_PUNCH: RGB8 = RGB8 { r: 0xFF, g: 0x00, b: 0xEA };
const GAME_SLASH: RGB8 = GAME_GREEN;
const GAME_HEAVY_SLASH: RGB8 = RED;
const GAME_DUST: RGB8 = RGB8 { r: 0xFF, g: 0x95, b: 0x00 };
const GAME_KICK: RGB8 = GAME_BLUE;
const GAME_SPRINT: RGB8 = WHITE;
const GAME_COUNTER: RGB8 = RGB8 { r: 0xFF, g: 0x00, b: 0x80 };

/// Fixed color scheme shown while the game layer is toggled on.
#[rustfmt::skip]
const GAME_PALETTE: [((u8, u8), RGB8); 16] = [
    // Movement cluster and spacebar.
    ((1, 1), RED), ((1, 2), RED), ((1, 3), RED), ((3, 5), RED),
    // Top-row accents.
    ((0, 2), GAME_BLUE), ((0, 3), GAME_YELLOW), ((0, 4), RED), ((0, 5), GAME_GREEN),
    // Attack buttons.
    ((0, 7), GAME_PUNCH), ((0, 8), GAME_SLASH), ((0, 9), GAME_DUST), ((0, 10), GAME_SPRINT),
    ((1, 7), GAME_KICK), ((1, 8), GAME_HEAVY_SLASH), ((1, 9), GAME_COUNTER),
    // Back out of game mode.
    ((3, 7), WHITE),
];

/// Layer-change hook. Applies the tri-layer rule, picks the matrix mode for
/// the resulting highest layer and returns the state that becomes
/// authoritative.
pub fn on_layer_state_change(state: LayerState, rgb: &mut impl RgbMatrix) -> LayerState {
    let state = state.update_tri_layer(Layer::Lower, Layer::Raise, Layer::Adjust);
    if state.highest() == Layer::Base {
        rgb.set_mode(RgbMode::RainbowMovingChevron);
        rgb.set_hsv(HSV_RED);
    } else {
        // Per-key indicators provide all the color on the upper layers.
        rgb.set_mode(RgbMode::Off);
        rgb.set_hsv(HSV_BLACK);
    }
    state
}

/// Per-refresh indicator hook. Always returns `false`: it only adds color on
/// top of whatever pass the framework runs.
///
/// The window given by `led_min..led_max` is ignored; the matrix is small
/// enough to repaint whole every refresh.
pub fn on_rgb_indicators(
    state: LayerState,
    _led_min: u8,
    _led_max: u8,
    rgb: &mut impl RgbMatrix,
) -> bool {
    match state.highest() {
        Layer::Adjust => {
            paint_layer_keys(&LAYERS, Layer::Adjust, WHITE, rgb);
            rgb.set_color_at(0, 7, RED); // game layer switch
            rgb.set_color_at(3, 4, WHITE); // held Lower key
            rgb.set_color_at(3, 7, WHITE); // held Raise key
        }
        Layer::Lower => {
            paint_layer_keys(&LAYERS, Layer::Lower, ORANGE, rgb);
            rgb.set_color_at(2, 7, WHITE); // back to base
            rgb.set_color_at(3, 4, WHITE);
        }
        Layer::Raise => {
            paint_layer_keys(&LAYERS, Layer::Raise, ORANGE, rgb);
            rgb.set_color_at(2, 7, WHITE);
            rgb.set_color_at(3, 7, WHITE);
        }
        Layer::Game => {
            for ((row, col), color) in GAME_PALETTE {
                rgb.set_color_at(row, col, color);
            }
        }
        // The framework's own animation is already showing.
        Layer::Base => {}
    }
    false
}
