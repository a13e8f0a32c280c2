//! Pure board transformations for the 4x4 tile grid.
//!
//! Every function takes a grid (or row) by value and returns a new one;
//! nothing here mutates in place or holds state. The session layer in the
//! crate root owns the mutable grid, the score, and the RNG.

use rand::Rng;

use crate::Direction;

/// Board side length. The grid is always `SIZE` x `SIZE`.
pub const SIZE: usize = 4;

/// A row-major grid. 0 is an empty cell; any other value is a positive
/// power of two.
pub type Grid = [[u32; SIZE]; SIZE];

/// An all-empty grid.
pub fn empty_grid() -> Grid {
    [[0; SIZE]; SIZE]
}

/// Shift all nonzero entries of a row to the front, preserving their order,
/// and zero-pad the rest.
pub fn compress_row(row: [u32; SIZE]) -> [u32; SIZE] {
    let mut out = [0; SIZE];
    let mut write = 0;
    for value in row {
        if value != 0 {
            out[write] = value;
            write += 1;
        }
    }
    out
}

/// Single left-to-right merge pass over an already-compressed row.
///
/// Each adjacent equal nonzero pair merges once: the left tile doubles, the
/// right one zeroes, and the doubled tile is not re-examined. `[2, 2, 2, 2]`
/// becomes `[4, 0, 4, 0]` here, never `[8, 0, 0, 0]`.
pub fn merge_row(row: [u32; SIZE]) -> [u32; SIZE] {
    let mut out = row;
    let mut i = 0;
    while i + 1 < SIZE {
        if out[i] != 0 && out[i] == out[i + 1] {
            out[i] *= 2;
            out[i + 1] = 0;
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

/// The full row transform for a left move: compress, merge once, compress
/// again to close the gaps the merge pass leaves behind.
pub fn slide_row(row: [u32; SIZE]) -> [u32; SIZE] {
    compress_row(merge_row(compress_row(row)))
}

/// Transpose the grid: `out[i][j] = grid[j][i]`.
pub fn transpose(grid: Grid) -> Grid {
    let mut out = empty_grid();
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = grid[c][r];
        }
    }
    out
}

/// Reverse every row of the grid (mirror left-right).
pub fn reverse_rows(grid: Grid) -> Grid {
    let mut out = grid;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

fn shift_left(grid: Grid) -> Grid {
    let mut out = grid;
    for row in out.iter_mut() {
        *row = slide_row(*row);
    }
    out
}

/// Apply a directional move, returning the new grid.
///
/// All four directions reduce to the left shift: right mirrors each row
/// first, up and down work on the transposed grid. Comparing the result to
/// the input tells the caller whether the move did anything.
pub fn shift(grid: Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => shift_left(grid),
        Direction::Right => reverse_rows(shift_left(reverse_rows(grid))),
        Direction::Up => transpose(shift_left(transpose(grid))),
        Direction::Down => transpose(shift(transpose(grid), Direction::Right)),
    }
}

/// Place a new tile (2 at 90%, 4 at 10%) in a uniformly chosen empty cell.
///
/// Returns `None` when the grid has no empty cell, leaving the caller to
/// detect game over separately. The returned grid differs from the input in
/// exactly one cell.
pub fn spawn_random_tile<R: Rng>(grid: Grid, rng: &mut R) -> Option<Grid> {
    let empties: Vec<(usize, usize)> = (0..SIZE)
        .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| grid[r][c] == 0)
        .collect();

    if empties.is_empty() {
        return None;
    }

    let (r, c) = empties[rng.gen_range(0..empties.len())];
    let mut out = grid;
    out[r][c] = if rng.gen::<f32>() < 0.9 { 2 } else { 4 };
    Some(out)
}

/// Whether any directional move could still change the grid.
///
/// True if some cell is empty or equals its right or down neighbor; every
/// possible move manifests as one of those two conditions along its axis.
pub fn has_moves(grid: &Grid) -> bool {
    for r in 0..SIZE {
        for c in 0..SIZE {
            if grid[r][c] == 0 {
                return true;
            }
            if c + 1 < SIZE && grid[r][c] == grid[r][c + 1] {
                return true;
            }
            if r + 1 < SIZE && grid[r][c] == grid[r + 1][c] {
                return true;
            }
        }
    }
    false
}

/// Sum of all tile values on the board. This is the score formula: total
/// tile mass, recomputed after each accepted move.
pub fn tile_sum(grid: &Grid) -> u32 {
    grid.iter().flatten().sum()
}

/// Largest tile value on the board.
pub fn max_tile(grid: &Grid) -> u32 {
    grid.iter().flatten().copied().max().unwrap_or(0)
}

/// Number of empty cells.
pub fn empty_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&v| v == 0).count()
}

// =============================================================================
// Tests
// =============================================================================
