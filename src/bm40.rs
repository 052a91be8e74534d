//! BM40 keymap: the travel board. Same four core layers as the MK47 but no
//! game layer and no per-key indicator pass; each layer just recolors the
//! whole matrix from [`on_layer_state_change`].

use keyberon::action::Action::{Custom, NoOp, Trans};
use keyberon::action::{d, k, l, m};
use keyberon::key_code::KeyCode::*;
use keyberon::layout::Layers;

use crate::layer::{Layer, LayerState};
use crate::rgb::{RgbMatrix, RgbMode, HSV_ORANGE, HSV_RED, HSV_WHITE};
use crate::CustomAction::{self, Reset, RgbBrightnessDown, RgbBrightnessUp, RgbToggle};
use crate::{MATRIX_COLS, MATRIX_ROWS};

const BASE: usize = Layer::Base as usize;
const LOWER: usize = Layer::Lower as usize;
const RAISE: usize = Layer::Raise as usize;

/// Key table for the four layers. The spacebar hole at (3, 6) is `NoOp`
/// everywhere, as on the MK47.
#[rustfmt::skip]
pub static LAYERS: Layers<MATRIX_COLS, MATRIX_ROWS, 4, CustomAction> = [
    // Base: QWERTY.
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
        [Trans; MATRIX_COLS],
        [Trans, Trans, Trans, Trans, Trans, Trans, Trans, Custom(RgbToggle), Custom(RgbBrightnessUp), Custom(RgbBrightnessDown), Trans, Custom(Reset)],
        [Trans; MATRIX_COLS],
        [Trans, Trans, Trans, Trans, Trans, Trans, NoOp, Trans, k(MediaNextSong), k(MediaVolDown), k(MediaVolUp), k(MediaPlayPause)],
    ],
];

/// Layer-change hook. Applies the tri-layer rule and picks a solid hue per
/// layer; this board has no indicator pass, so the whole-matrix color is the
/// only layer cue.
pub fn on_layer_state_change(state: LayerState, rgb: &mut impl RgbMatrix) -> LayerState {
    let state = state.update_tri_layer(Layer::Lower, Layer::Raise, Layer::Adjust);
    match state.highest() {
        // Game never appears in this table; anything unexpected gets the
        // base appearance.
        Layer::Base | Layer::Game => {
            rgb.set_mode(RgbMode::RainbowMovingChevron);
            rgb.set_hsv(HSV_RED);
        }
        Layer::Lower | Layer::Raise => {
            rgb.set_mode(RgbMode::SolidColor);
            rgb.set_hsv(HSV_ORANGE);
        }
        Layer::Adjust => {
            rgb.set_mode(RgbMode::SolidColor);
            rgb.set_hsv(HSV_WHITE);
        }
    }
    state
}
