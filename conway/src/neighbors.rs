// neighbors.rs - Living-neighbor counting, edge-clipped (no wraparound)

use crate::grid::{ALIVE, Grid};
use crate::partition::{Band, resolve_rows};

/// Living neighbors of `(x, y)` among the 8 surrounding cells that lie inside the grid.
pub fn count(grid: &Grid, x: usize, y: usize) -> u8 {
    let size = grid.size();
    let mut neighbours = 0;
    for ny in y.saturating_sub(1)..=(y + 1).min(size - 1) {
        for nx in x.saturating_sub(1)..=(x + 1).min(size - 1) {
            if grid.get(nx, ny) == ALIVE {
                neighbours += 1;
            }
        }
    }
    if grid.get(x, y) == ALIVE { neighbours - 1 } else { neighbours }
}

/// Fills `out` with the counts for `rows`. `out` holds exactly those rows.
pub fn count_rows(grid: &Grid, rows: Band, out: &mut [u8]) {
    let size = grid.size();
    debug_assert_eq!(out.len(), rows.len() * size);
    for (row_out, y) in out.chunks_mut(size).zip(rows) {
        for (x, slot) in row_out.iter_mut().enumerate() {
            *slot = count(grid, x, y);
        }
    }
}

/// Scratch grid of neighbor counts, valid between the counting and transition rounds of a step.
#[derive(Debug, Clone)]
pub struct NeighborCounts {
    size: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn new(size: usize) -> Self {
        Self { size, counts: vec![0; size * size] }
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.counts[y * self.size + x]
    }

    /// Counts every cell in `rows`; `None` or an empty range means the whole grid.
    pub fn count_all(&mut self, grid: &Grid, rows: Option<Band>) {
        let rows = resolve_rows(self.size, rows);
        let span = rows.start * self.size..rows.end * self.size;
        count_rows(grid, rows, &mut self.counts[span]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn full_block_counts() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = Grid::random(3, 1.0, &mut rng);
        assert_eq!(count(&grid, 1, 1), 8);
        // corners and edges are clipped, not wrapped
        assert_eq!(count(&grid, 0, 0), 3);
        assert_eq!(count(&grid, 2, 2), 3);
        assert_eq!(count(&grid, 1, 0), 5);
    }

    #[test]
    fn no_wraparound() {
        let grid = Grid::from_live_cells(5, &[(4, 0), (0, 4), (4, 4)]);
        assert_eq!(count(&grid, 0, 0), 0);
    }

    #[test]
    fn dead_center_counts_all_neighbours() {
        let grid = Grid::from_live_cells(3, &[(0, 0), (2, 2)]);
        assert_eq!(count(&grid, 1, 1), 2);
        assert_eq!(count(&grid, 0, 0), 0);
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::from_live_cells(1, &[(0, 0)]);
        assert_eq!(count(&grid, 0, 0), 0);
    }

    #[test]
    fn count_all_defaults_to_whole_grid() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::random(9, 0.5, &mut rng);

        let mut whole = NeighborCounts::new(9);
        whole.count_all(&grid, None);
        let mut sentinel = NeighborCounts::new(9);
        sentinel.count_all(&grid, Some(0..0));
        assert_eq!(whole.as_slice(), sentinel.as_slice());

        let mut banded = NeighborCounts::new(9);
        banded.count_all(&grid, Some(0..4));
        banded.count_all(&grid, Some(4..9));
        assert_eq!(whole.as_slice(), banded.as_slice());

        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(whole.get(x, y), count(&grid, x, y));
            }
        }
    }

    #[test]
    fn partial_range_leaves_other_rows_untouched() {
        let grid = Grid::from_live_cells(4, &[(0, 0), (1, 0), (0, 1)]);
        let mut counts = NeighborCounts::new(4);
        counts.count_all(&grid, Some(2..4));
        assert_eq!(counts.get(0, 0), 0);
        assert_eq!(counts.get(1, 1), 0);
        assert_eq!(counts.get(0, 2), 1);
    }

    proptest! {
        #[test]
        fn count_is_bounded_and_excludes_self(seed in any::<u64>(), size in 1..12_usize, chance in 0.0..=1.0_f64) {
            let grid = Grid::random(size, chance, &mut StdRng::seed_from_u64(seed));
            for y in 0..size {
                for x in 0..size {
                    let n = count(&grid, x, y);
                    prop_assert!(n <= 8);

                    // flipping the centre never changes its own count
                    let mut flipped = grid.clone();
                    flipped.set(x, y, if grid.is_alive(x, y) { crate::grid::DEAD } else { ALIVE });
                    prop_assert_eq!(count(&flipped, x, y), n);
                }
            }
        }
    }
}
