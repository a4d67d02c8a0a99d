use crate::grid::{ALIVE, Grid};

pub struct Pattern {
    pub name: &'static str,
    /// `(x, y)` offsets from the top-left corner of the grid.
    pub cells: &'static [(usize, usize)],
}

/// Travels one cell down and right every four generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 2), (2, 2), (0, 2), (2, 1), (1, 0)],
};

/// Sets the pattern's cells alive on top of whatever is there. Cells outside the grid are skipped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    let size = grid.size();
    for &(x, y) in pattern.cells {
        if x < size && y < size {
            grid.set(x, y, ALIVE);
        }
    }
}
