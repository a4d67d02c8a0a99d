// seed.rs - Seed-based rule: live cells plant seeds in their neighbors, then every cell is judged
//
// Planting decrements the live cell and then increments its whole clipped 3x3
// block, centre included. A live cell therefore ends the seed pass at
// `ALIVE + n` and a dead one at `n`, where `n` is the number of seeds it got.

use crate::grid::{ALIVE, Cell, DEAD, Grid};
use crate::partition::Band;

/// Final value of a cell after the seed pass.
#[inline]
pub fn judge(cell: Cell) -> Cell {
    if cell >= ALIVE {
        if cell == ALIVE + 2 || cell == ALIVE + 3 { ALIVE } else { DEAD }
    } else if cell == 3 {
        ALIVE
    } else {
        DEAD
    }
}

pub fn judge_band(cells: &mut [Cell]) {
    for cell in cells {
        *cell = judge(*cell);
    }
}

/// The plain single-threaded form: seeds are planted straight into the grid.
pub fn simulate_in_place(grid: &mut Grid) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if grid.get(x, y) >= ALIVE {
                plant_in_place(grid, x, y);
            }
        }
    }
    judge_band(grid.cells_mut());
}

fn plant_in_place(grid: &mut Grid, x: usize, y: usize) {
    let size = grid.size();
    grid.set(x, y, grid.get(x, y) - 1);
    for ny in y.saturating_sub(1)..=(y + 1).min(size - 1) {
        for nx in x.saturating_sub(1)..=(x + 1).min(size - 1) {
            grid.set(nx, ny, grid.get(nx, ny) + 1);
        }
    }
}

/// Band-private seed deltas: the band's rows plus one halo row on each side.
/// Workers plant into these instead of the shared grid, so no band writes
/// rows it does not own.
#[derive(Debug, Clone)]
pub struct Overflow {
    size: usize,
    first_row: usize,
    deltas: Vec<i16>,
}

impl Overflow {
    pub fn for_band(size: usize, band: &Band) -> Self {
        let (first_row, last_row) = if band.is_empty() {
            (band.start, band.start)
        } else {
            (band.start.saturating_sub(1), (band.end + 1).min(size))
        };
        Self { size, first_row, deltas: vec![0; (last_row - first_row) * size] }
    }

    /// Rows this buffer may carry contributions for.
    pub fn rows(&self) -> Band {
        let height = if self.size == 0 { 0 } else { self.deltas.len() / self.size };
        self.first_row..self.first_row + height
    }

    pub fn delta(&self, x: usize, y: usize) -> i16 {
        self.deltas[(y - self.first_row) * self.size + x]
    }

    #[inline]
    fn add(&mut self, x: usize, y: usize, amount: i16) {
        self.deltas[(y - self.first_row) * self.size + x] += amount;
    }

    /// Plants a seed for every live cell of `band`, reading the grid only.
    pub fn seed(&mut self, grid: &Grid, band: &Band) {
        self.deltas.fill(0);
        let size = self.size;
        for y in band.clone() {
            for x in 0..size {
                if grid.get(x, y) < ALIVE {
                    continue;
                }
                self.add(x, y, -1);
                for ny in y.saturating_sub(1)..=(y + 1).min(size - 1) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(size - 1) {
                        self.add(nx, ny, 1);
                    }
                }
            }
        }
    }
}

/// Adds every buffer's contributions for `band` onto `cells`, which holds exactly the band's rows.
pub fn merge_band(overflow: &[Overflow], band: &Band, size: usize, cells: &mut [Cell]) {
    for buffer in overflow {
        let rows = buffer.rows();
        for y in rows.start.max(band.start)..rows.end.min(band.end) {
            let row = &mut cells[(y - band.start) * size..(y - band.start + 1) * size];
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = (i16::from(*cell) + buffer.delta(x, y)) as Cell;
            }
        }
    }
}
