// rule.rs - Rule variants and the neighbor-based transition

use std::fmt;

use crate::grid::{ALIVE, Cell, DEAD, Grid};
use crate::neighbors::NeighborCounts;
use crate::partition::{Band, resolve_rows};

/// The two hard-coded rule variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Count neighbors into a scratch grid, then apply birth/death per cell.
    #[default]
    NeighborBased,
    /// Let every live cell plant a seed in its neighbors, then judge the accumulated values.
    SeedBased,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NeighborBased => f.write_str("neighbor-based"),
            Rule::SeedBased => f.write_str("seed-based"),
        }
    }
}

/// Next value of a cell given its living-neighbor count.
#[inline]
pub fn next_state(cell: Cell, neighbours: u8) -> Cell {
    match (cell == ALIVE, neighbours) {
        (true, 2) | (true, 3) => ALIVE, // Survival
        (false, 3) => ALIVE,            // Birth
        _ => DEAD,                      // Death or stays dead
    }
}

/// Applies [`next_state`] to a band. `cells` and `counts` cover the same rows.
pub fn apply_transition(cells: &mut [Cell], counts: &[u8]) {
    debug_assert_eq!(cells.len(), counts.len());
    for (cell, &n) in cells.iter_mut().zip(counts) {
        *cell = next_state(*cell, n);
    }
}

/// Sequential transition over `rows`; `None` or an empty range means the whole grid.
/// `counts` must already hold this generation's counts for those rows.
pub fn apply_transition_rows(grid: &mut Grid, counts: &NeighborCounts, rows: Option<Band>) {
    let size = grid.size();
    let rows = resolve_rows(size, rows);
    let span = rows.start * size..rows.end * size;
    apply_transition(&mut grid.cells_mut()[span.clone()], &counts.as_slice()[span]);
}
