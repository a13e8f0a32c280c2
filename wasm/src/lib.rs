//! # twenty48 WebAssembly Bindings
//!
//! JavaScript-friendly bindings to the 2048 board engine using wasm-bindgen.
//! Wraps a `GameSession` in a class-like API: the page renders the grid and
//! score it gets back, and feeds directional input (keyboard or on-screen
//! buttons) into `applyMove`.

use serde::Serialize;
use twenty48_core::{Direction, GameSession};
use wasm_bindgen::prelude::*;

/// Delta of an `applyMove` call, serialized for JavaScript.
#[derive(Serialize)]
pub struct JsMoveOutcome {
    /// The grid after the move: 16 values, row-major order, 0 for empty.
    pub grid: Vec<u32>,
    /// Current score (sum of all tiles on the board).
    pub score: u32,
    /// Whether the board changed (a tile was spawned if true).
    pub changed: bool,
    /// Whether the game is over.
    pub over: bool,
}

/// WebAssembly wrapper around one game session.
#[wasm_bindgen]
pub struct WasmSession {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a new session with the given seed.
    ///
    /// The seed is a 64-bit integer used to initialize the deterministic
    /// spawn RNG; the same seed replays the same game.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WasmSession {
        WasmSession {
            session: GameSession::new(seed),
        }
    }

    /// Restart: fresh board with two tiles, score back to 0.
    pub fn reset(&mut self, seed: u64) {
        self.session.restart(seed);
    }

    /// Apply a directional move.
    ///
    /// Direction values:
    /// - 0 = Up
    /// - 1 = Down
    /// - 2 = Left
    /// - 3 = Right
    ///
    /// Returns an object with:
    /// - grid: 16 tile values, row-major
    /// - score: current score
    /// - changed: whether the board changed
    /// - over: whether the game is over
    ///
    /// An invalid direction byte reports the current state with
    /// changed = false instead of throwing.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, direction: u8) -> JsValue {
        let (changed, over) = match Direction::from_u8(direction) {
            Some(d) => {
                let outcome = self.session.apply_move(d);
                (outcome.changed, outcome.over)
            }
            None => (false, self.session.is_over()),
        };
        self.outcome_to_js(changed, over)
    }

    /// The current grid as a flat Uint32Array (16 values, row-major).
    #[wasm_bindgen(js_name = getGrid)]
    pub fn get_grid(&self) -> Vec<u32> {
        self.session.grid().iter().flatten().copied().collect()
    }

    /// The current score.
    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self) -> u32 {
        self.session.score()
    }

    /// Whether the game is over.
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// The largest tile on the board.
    #[wasm_bindgen(js_name = getMaxTile)]
    pub fn get_max_tile(&self) -> u32 {
        self.session.max_tile()
    }

    /// Per-direction legality as four 0/1 flags [Up, Down, Left, Right],
    /// for greying out dead controls.
    #[wasm_bindgen(js_name = getAvailableMoves)]
    pub fn get_available_moves(&self) -> Vec<u8> {
        self.session
            .available_moves()
            .iter()
            .map(|&m| u8::from(m))
            .collect()
    }

    fn outcome_to_js(&self, changed: bool, over: bool) -> JsValue {
        let outcome = JsMoveOutcome {
            grid: self.get_grid(),
            score: self.session.score(),
            changed,
            over,
        };
        serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roundtrip() {
        let mut session = WasmSession::new(42);
        assert_eq!(session.get_grid().len(), 16);
        assert_eq!(session.get_score(), 0);
        assert!(!session.is_over());

        session.reset(42);
        assert_eq!(session.get_score(), 0);
        assert_eq!(session.get_available_moves().len(), 4);
    }
}
