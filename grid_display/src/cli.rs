use clap::{Parser, ValueEnum};
use conway::{Config, Rule};

/// Conway's Game of Life with row-banded parallel stepping
#[derive(Parser, Debug)]
#[command(name = "grid_display", version, about, long_about = None)]
pub struct Cli {
    /// Count of rows and columns
    #[arg(long, default_value_t = 30)]
    pub size: usize,

    /// Target steps per second (0 = as fast as possible)
    #[arg(long, default_value_t = 3.0)]
    pub speed: f64,

    /// Chance for each cell to start alive
    #[arg(long, default_value_t = 0.3)]
    pub chance: f64,

    /// Size in pixels of one cell in the window
    #[arg(long, default_value_t = 15)]
    pub zoom: u32,

    /// Number of worker threads
    #[arg(short = 'j', long = "threads", default_value_t = 1)]
    pub thread_count: usize,

    /// Do not spawn a glider in the top-left corner
    #[arg(long)]
    pub no_glider: bool,

    /// Run without a window
    #[arg(long)]
    pub headless: bool,

    /// Rule used to advance the grid
    #[arg(long, value_enum, default_value_t = RuleArg::Neighbor)]
    pub rule: RuleArg,

    /// Seed for the initial grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many generations (headless only)
    #[arg(long)]
    pub generations: Option<u64>,

    /// Print the grid after every step (headless only)
    #[arg(long)]
    pub print: bool,

    /// Enable debug output, including per-step timings
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleArg {
    /// Count neighbors, then apply birth and death
    Neighbor,
    /// Live cells seed their neighbors, then every cell is judged
    Seed,
}

impl From<RuleArg> for Rule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Neighbor => Rule::NeighborBased,
            RuleArg::Seed => Rule::SeedBased,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            size: self.size,
            speed: self.speed,
            chance: self.chance,
            zoom: self.zoom,
            thread_count: self.thread_count,
            glider: !self.no_glider,
            with_gui: !self.headless,
            rule: self.rule.into(),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_config_defaults() {
        let cli = Cli::parse_from(["grid_display"]);
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "grid_display", "--size", "300", "--speed", "0.5", "--chance", "0.33", "--zoom", "3",
            "-j", "10", "--no-glider", "--headless", "--rule", "seed", "--seed", "7",
        ]);
        let config = cli.config();
        assert_eq!(config.size, 300);
        assert_eq!(config.speed, 0.5);
        assert_eq!(config.chance, 0.33);
        assert_eq!(config.zoom, 3);
        assert_eq!(config.thread_count, 10);
        assert!(!config.glider);
        assert!(!config.with_gui);
        assert_eq!(config.rule, Rule::SeedBased);
        assert_eq!(config.seed, Some(7));
    }
}
