// scheduler.rs - Runs each pass band-by-band on a fixed worker pool
//
// Every round is a parallel for-each over disjoint band slices. The for-each
// only returns once all bands are done, which is the barrier between rounds.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::neighbors::{NeighborCounts, count_rows};
use crate::partition::{Band, partition_rows, split_rows_mut};
use crate::rule::apply_transition;
use crate::seed::{Overflow, judge_band, merge_band};

pub struct StepScheduler {
    size: usize,
    bands: Vec<Band>,
    pool: ThreadPool,
}

impl StepScheduler {
    pub fn new(size: usize, thread_count: usize) -> Result<Self, ConfigError> {
        if thread_count == 0 {
            return Err(ConfigError::InvalidThreadCount);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .thread_name(|i| format!("conway-worker-{i}"))
            .build()?;
        let bands = partition_rows(size, thread_count);
        debug!(size, thread_count, ?bands, "worker pool ready");
        Ok(Self { size, bands, pool })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn thread_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// One band-private seed buffer per band, for [`step_seed_based`](Self::step_seed_based).
    pub fn overflow_buffers(&self) -> Vec<Overflow> {
        self.bands.iter().map(|band| Overflow::for_band(self.size, band)).collect()
    }

    /// Counting round, barrier, transition round, barrier.
    pub fn step_neighbor_based(&self, grid: &mut Grid, counts: &mut NeighborCounts) {
        let size = self.size;
        let bands = &self.bands;

        self.pool.install(|| {
            let current: &Grid = grid;
            split_rows_mut(counts.as_mut_slice(), size, bands)
                .into_par_iter()
                .zip(bands.par_iter())
                .for_each(|(out, band)| count_rows(current, band.clone(), out));
        });

        let counts = counts.as_slice();
        self.pool.install(|| {
            split_rows_mut(grid.cells_mut(), size, bands)
                .into_par_iter()
                .zip(bands.par_iter())
                .for_each(|(cells, band)| {
                    apply_transition(cells, &counts[band.start * size..band.end * size]);
                });
        });
    }

    /// Seed round into band-private buffers, barrier, merge round, barrier,
    /// judgement round, barrier. The grid is read-only while seeds are planted.
    pub fn step_seed_based(&self, grid: &mut Grid, overflow: &mut [Overflow]) {
        let size = self.size;
        let bands = &self.bands;
        debug_assert_eq!(overflow.len(), bands.len());

        self.pool.install(|| {
            let current: &Grid = grid;
            overflow
                .par_iter_mut()
                .zip(bands.par_iter())
                .for_each(|(buffer, band)| buffer.seed(current, band));
        });

        let overflow: &[Overflow] = overflow;
        self.pool.install(|| {
            split_rows_mut(grid.cells_mut(), size, bands)
                .into_par_iter()
                .zip(bands.par_iter())
                .for_each(|(cells, band)| merge_band(overflow, band, size, cells));
        });

        self.pool.install(|| {
            split_rows_mut(grid.cells_mut(), size, bands)
                .into_par_iter()
                .for_each(judge_band);
        });
    }
}
