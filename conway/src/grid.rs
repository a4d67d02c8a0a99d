// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use rand::Rng;

/// State of a single cell. Plain integers so the seed rule can accumulate in place.
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 9;

/// Square, row-major grid of cell values. Rows are contiguous in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn dead(size: usize) -> Self {
        Self { size, cells: vec![DEAD; size * size] }
    }

    /// Every cell independently starts alive with probability `chance`.
    pub fn random<R: Rng + ?Sized>(size: usize, chance: f64, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| if rng.gen_range(0.0..1.0) < chance { ALIVE } else { DEAD })
            .collect();
        Self { size, cells }
    }

    /// Dead grid with the given `(x, y)` cells alive. Out-of-bounds cells are ignored.
    pub fn from_live_cells(size: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::dead(size);
        for &(x, y) in live {
            if x < size && y < size {
                grid.set(x, y, ALIVE);
            }
        }
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == ALIVE
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            live: self.cells.iter().map(|&c| c == ALIVE).collect(),
        }
    }
}

/// Read-only live/dead copy of a grid, handed to whatever draws it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    size: usize,
    live: Vec<bool>,
}

impl Snapshot {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.live[y * self.size + x]
    }

    /// `(x, y)` of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.live
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i % self.size, i / self.size))
    }

    pub fn population(&self) -> usize {
        self.live.iter().filter(|&&alive| alive).count()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.live.chunks(self.size) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
