//! # twenty48 Core Engine
//!
//! The 2048 board engine: pure grid transforms in [`board`], plus a
//! [`GameSession`] state holder with a deterministic, seedable PRNG so
//! frontends (CLI, WebAssembly) and tests can reproduce whole games.
//!
//! ## Example
//!
//! ```rust
//! use twenty48_core::{Direction, GameSession};
//!
//! let mut session = GameSession::new(42);
//! let outcome = session.apply_move(Direction::Left);
//! println!("Score: {}, Changed: {}", outcome.score, outcome.changed);
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod board;

use board::Grid;

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Convert a u8 to a Direction (0=Up, 1=Down, 2=Left, 3=Right).
    /// Returns None for invalid values.
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// All four directions, in `from_u8` order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// The delta reported back to the caller after [`GameSession::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the board changed (and a new tile was spawned).
    pub changed: bool,
    /// The score after the move: the sum of all tiles on the board.
    pub score: u32,
    /// Whether the game is over (no move in any direction would change
    /// the board).
    pub over: bool,
}

/// One game of 2048: the current grid, the score, and the spawn RNG.
///
/// The session is the single owner of mutable game state. Frontends hold a
/// `GameSession` and call [`apply_move`](Self::apply_move) on each
/// directional input; no-op moves leave everything untouched.
///
/// Scoring is the sum of all tile values on the board, recomputed after
/// each accepted move. A fresh or restarted session reads 0 until its
/// first accepted move.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    score: u32,
    rng: SmallRng,
    over: bool,
}

impl GameSession {
    /// Create a new session with the given seed.
    ///
    /// The board starts with two random tiles (90% chance of 2, 10% of 4).
    pub fn new(seed: u64) -> Self {
        let mut session = GameSession {
            grid: board::empty_grid(),
            score: 0,
            rng: SmallRng::seed_from_u64(seed),
            over: false,
        };
        session.spawn();
        session.spawn();
        session.over = !board::has_moves(&session.grid);
        session
    }

    /// Restart: fresh board with two random tiles, score back to 0.
    pub fn restart(&mut self, seed: u64) {
        self.grid = board::empty_grid();
        self.score = 0;
        self.rng = SmallRng::seed_from_u64(seed);
        self.over = false;
        self.spawn();
        self.spawn();
        self.over = !board::has_moves(&self.grid);
    }

    /// Apply a directional move.
    ///
    /// The shifted grid is compared to the current one by structural
    /// equality; only when it differs is the move committed, one tile
    /// spawned, and the score recomputed. A move that changes nothing
    /// spawns nothing and leaves the score alone, as does any move on a
    /// finished session.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.over {
            return MoveOutcome {
                changed: false,
                score: self.score,
                over: true,
            };
        }

        let shifted = board::shift(self.grid, direction);
        let changed = shifted != self.grid;
        if changed {
            self.grid = shifted;
            self.spawn();
            self.score = board::tile_sum(&self.grid);
        }
        self.over = !board::has_moves(&self.grid);

        MoveOutcome {
            changed,
            score: self.score,
            over: self.over,
        }
    }

    /// Whether a move in the given direction would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        board::shift(self.grid, direction) != self.grid
    }

    /// Per-direction legality as `[Up, Down, Left, Right]`. Frontends use
    /// this to grey out dead controls.
    pub fn available_moves(&self) -> [bool; 4] {
        [
            self.can_move(Direction::Up),
            self.can_move(Direction::Down),
            self.can_move(Direction::Left),
            self.can_move(Direction::Right),
        ]
    }

    /// The current grid, row-major.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current score (sum of all tiles after the last accepted move).
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the game is over.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The largest tile on the board.
    pub fn max_tile(&self) -> u32 {
        board::max_tile(&self.grid)
    }

    /// Number of empty cells on the board.
    pub fn empty_count(&self) -> usize {
        board::empty_count(&self.grid)
    }

    fn spawn(&mut self) {
        if let Some(next) = board::spawn_random_tile(self.grid, &mut self.rng) {
            self.grid = next;
        }
    }
}

impl std::fmt::Display for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.grid {
            write!(f, "|")?;
            for &val in row {
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Session lifecycle tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_session_has_two_tiles() {
        let session = GameSession::new(42);
        assert_eq!(session.empty_count(), 14);
        assert_eq!(session.score(), 0);
        assert!(!session.is_over());
    }

    #[test]
    fn test_new_session_deterministic() {
        let a = GameSession::new(12345);
        let b = GameSession::new(12345);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::new(54321);
        let mut b = GameSession::new(54321);
        for direction in [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ] {
            assert_eq!(a.apply_move(direction), b.apply_move(direction));
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn test_different_seeds_different_games() {
        let a = GameSession::new(111);
        let b = GameSession::new(222);
        // Very unlikely to be the same
        assert_ne!(a.grid(), b.grid());
    }

    #[test]
    fn test_restart_matches_fresh_session() {
        let mut session = GameSession::new(42);
        session.apply_move(Direction::Left);
        session.apply_move(Direction::Up);

        session.restart(42);
        let fresh = GameSession::new(42);
        assert_eq!(session.grid(), fresh.grid());
        assert_eq!(session.score(), 0);
        assert!(!session.is_over());
    }

    // -------------------------------------------------------------------------
    // Move acceptance tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_noop_move_spawns_nothing() {
        let mut session = GameSession::new(0);
        // Left-aligned column: moving left does nothing.
        session.grid = [
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [8, 0, 0, 0],
            [16, 0, 0, 0],
        ];
        let before = session.grid;

        let outcome = session.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(outcome.score, 0);
        assert_eq!(session.grid, before);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_accepted_move_spawns_and_scores() {
        let mut session = GameSession::new(7);
        session.grid = [
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ];

        let outcome = session.apply_move(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(session.grid[0][0], 4);
        // One tile spawned somewhere in the 15 remaining empty cells.
        assert_eq!(session.empty_count(), 14);
        // Score is total tile mass: the merged 4 plus the spawned 2 or 4.
        assert_eq!(outcome.score, board::tile_sum(session.grid()));
        assert!(outcome.score == 6 || outcome.score == 8);
    }

    #[test]
    fn test_score_is_board_sum_not_merge_points() {
        let mut session = GameSession::new(9);
        session.grid = [
            [2, 2, 4, 4],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ];

        let outcome = session.apply_move(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(session.grid[0][0], 4);
        assert_eq!(session.grid[0][1], 8);
        // Merge points would be 12; total mass is 12 plus the spawned tile.
        assert!(outcome.score == 14 || outcome.score == 16);
        assert_eq!(session.score(), board::tile_sum(session.grid()));
    }

    #[test]
    fn test_move_on_finished_session_is_noop() {
        let mut session = GameSession::new(0);
        session.grid = [
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ];
        session.over = true;
        let before = session.grid;

        let outcome = session.apply_move(Direction::Up);
        assert!(!outcome.changed);
        assert!(outcome.over);
        assert_eq!(session.grid, before);
    }

    // -------------------------------------------------------------------------
    // Legality tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_available_moves_fresh_session() {
        let session = GameSession::new(42);
        assert!(session.available_moves().iter().any(|&m| m));
    }

    #[test]
    fn test_available_moves_directional() {
        let mut session = GameSession::new(3);
        // Only the top-row pair can merge; vertical moves change nothing.
        session.grid = [
            [2, 2, 4, 8],
            [32, 64, 128, 16],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ];
        assert!(!session.is_over());
        assert_eq!(session.available_moves(), [false, false, true, true]);
    }

    #[test]
    fn test_no_moves_on_terminal_board() {
        let mut session = GameSession::new(0);
        session.grid = [
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ];
        assert_eq!(session.available_moves(), [false, false, false, false]);
        assert!(!board::has_moves(session.grid()));
    }

    // -------------------------------------------------------------------------
    // Direction conversion tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_direction_from_u8() {
        assert_eq!(Direction::from_u8(0), Some(Direction::Up));
        assert_eq!(Direction::from_u8(1), Some(Direction::Down));
        assert_eq!(Direction::from_u8(2), Some(Direction::Left));
        assert_eq!(Direction::from_u8(3), Some(Direction::Right));
        assert_eq!(Direction::from_u8(4), None);
        assert_eq!(Direction::from_u8(255), None);
    }

    #[test]
    fn test_direction_all_matches_from_u8() {
        for (i, direction) in Direction::all().into_iter().enumerate() {
            assert_eq!(Direction::from_u8(i as u8), Some(direction));
        }
    }

    // -------------------------------------------------------------------------
    // Display test
    // -------------------------------------------------------------------------

    #[test]
    fn test_display_format() {
        let session = GameSession::new(42);
        let display = format!("{}", session);
        assert!(display.contains("Score:"));
        assert!(display.contains("+------+"));
    }
}
