// simulation.rs - Owns the grid and advances it one generation per call

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ConfigError;
use crate::grid::{Grid, Snapshot};
use crate::neighbors::NeighborCounts;
use crate::patterns::{GLIDER, apply_pattern};
use crate::rule::Rule;
use crate::scheduler::StepScheduler;
use crate::seed::Overflow;

/// How many past generations are remembered for cycle detection.
const HISTORY_LEN: usize = 10;

/// Scratch state each rule keeps between steps.
enum RuleState {
    NeighborBased { counts: NeighborCounts },
    SeedBased { overflow: Vec<Overflow> },
}

/// What happened during one call to [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    pub elapsed: Duration,
    pub population: usize,
    /// The new grid equals one of the last ten.
    pub repeated: bool,
}

pub struct Simulation {
    grid: Grid,
    rule: Rule,
    state: RuleState,
    scheduler: StepScheduler,
    generation: u64,
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    /// Validates `config`, draws the initial grid and spins up the worker pool.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        for warning in config.validate()? {
            warn!("{warning}");
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut grid = Grid::random(config.size, config.chance, &mut rng);

        if config.glider {
            match config.rule {
                Rule::NeighborBased => apply_pattern(&mut grid, &GLIDER),
                Rule::SeedBased => warn!("glider is only spawned for the neighbor-based rule; skipping"),
            }
        }

        let simulation = Self::from_grid(grid, config.rule, config.thread_count)?;
        info!(
            size = config.size,
            rule = %config.rule,
            threads = config.thread_count,
            population = simulation.grid.population(),
            "simulation ready"
        );
        Ok(simulation)
    }

    pub fn from_grid(grid: Grid, rule: Rule, thread_count: usize) -> Result<Self, ConfigError> {
        if grid.size() == 0 {
            return Err(ConfigError::InvalidSize);
        }
        let scheduler = StepScheduler::new(grid.size(), thread_count)?;
        let state = match rule {
            Rule::NeighborBased => RuleState::NeighborBased { counts: NeighborCounts::new(grid.size()) },
            Rule::SeedBased => RuleState::SeedBased { overflow: scheduler.overflow_buffers() },
        };

        let mut simulation = Self {
            grid,
            rule,
            state,
            scheduler,
            generation: 0,
            grid_history: [0; HISTORY_LEN],
            history_count: 0,
        };
        simulation.check_for_cycle();
        Ok(simulation)
    }

    /// Advances the grid by one generation.
    pub fn step(&mut self) -> StepReport {
        let start = Instant::now();
        match &mut self.state {
            RuleState::NeighborBased { counts } => {
                self.scheduler.step_neighbor_based(&mut self.grid, counts)
            }
            RuleState::SeedBased { overflow } => {
                self.scheduler.step_seed_based(&mut self.grid, overflow)
            }
        }
        let elapsed = start.elapsed();

        self.generation += 1;
        let repeated = self.check_for_cycle();
        let population = self.grid.population();
        debug!(
            generation = self.generation,
            population,
            "simulated step in {:.3}ms",
            elapsed.as_secs_f64() * 1000.0
        );

        StepReport { generation: self.generation, elapsed, population, repeated }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn scheduler(&self) -> &StepScheduler {
        &self.scheduler
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.cells().hash(&mut hasher);
        hasher.finish()
    }

    /// Records the current grid and reports whether it was seen recently.
    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        let filled = self.history_count.min(HISTORY_LEN);
        let seen = self.grid_history[..filled].contains(&current_hash);
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        seen
    }
}
