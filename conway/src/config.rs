// config.rs - Construction parameters for a simulation

use crate::error::{ConfigError, ConfigWarning};
use crate::rule::Rule;

/// Everything needed to build a [`Simulation`](crate::Simulation) and drive it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Count of rows and columns.
    pub size: usize,
    /// Target steps per second. `0.0` runs unthrottled.
    pub speed: f64,
    /// Chance for each cell to start alive.
    pub chance: f64,
    /// A cell is drawn as a `zoom * zoom` square in the GUI.
    pub zoom: u32,
    pub thread_count: usize,
    /// Spawn a glider in the top-left corner.
    pub glider: bool,
    pub with_gui: bool,
    pub rule: Rule,
    /// Seed for the initial grid. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 30,
            speed: 3.0,
            chance: 0.3,
            zoom: 15,
            thread_count: 1,
            glider: true,
            with_gui: true,
            rule: Rule::NeighborBased,
            seed: None,
        }
    }
}

impl Config {
    /// Fails fast on unusable values and returns the non-fatal findings.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if self.thread_count == 0 {
            return Err(ConfigError::InvalidThreadCount);
        }
        if !(0.0..=1.0).contains(&self.chance) {
            return Err(ConfigError::InvalidChance(self.chance));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if self.zoom == 0 {
            return Err(ConfigError::InvalidZoom);
        }

        let mut warnings = Vec::new();
        let remainder = self.size % self.thread_count;
        if remainder != 0 {
            warnings.push(ConfigWarning::PartitionRemainder {
                size: self.size,
                thread_count: self.thread_count,
                remainder,
            });
        }
        Ok(warnings)
    }
}
