//! Cellular-automaton (Game of Life) core with row-banded parallel stepping.
//!
//! A [`Simulation`] owns a square [`Grid`] and advances it one generation per
//! [`Simulation::step`]. Each pass is split into contiguous row bands that run
//! on a fixed worker pool, with a barrier after every round. Rendering is left
//! to the caller, who gets a [`Snapshot`] after each step.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod partition;
pub mod patterns;
pub mod rule;
pub mod scheduler;
pub mod seed;
pub mod simulation;

pub use config::Config;
pub use error::{ConfigError, ConfigWarning, DriverError};
pub use grid::{ALIVE, Cell, DEAD, Grid, Snapshot};
pub use rule::Rule;
pub use simulation::{Simulation, StepReport};
