// driver.rs - Headless play loop: paced steps until a generation limit or Ctrl-C

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use crate::error::DriverError;
use crate::grid::Snapshot;
use crate::simulation::{Simulation, StepReport};

/// How often to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Every(Duration),
    Unthrottled,
}

impl Pacing {
    /// `speed` steps per second; anything not strictly positive runs unthrottled.
    pub fn from_speed(speed: f64) -> Self {
        if speed > 0.0 && speed.is_finite() {
            Pacing::Every(Duration::from_secs_f64(1.0 / speed))
        } else {
            Pacing::Unthrottled
        }
    }
}

/// Steps `simulation` until `generations` steps have run (forever if `None`)
/// or Ctrl-C arrives. Calls `on_step` after every step. Returns the number of
/// steps taken.
pub async fn run<F>(
    simulation: &mut Simulation,
    pacing: Pacing,
    generations: Option<u64>,
    mut on_step: F,
) -> u64
where
    F: FnMut(&StepReport, &Snapshot),
{
    let mut interval = match pacing {
        Pacing::Every(period) => {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Some(interval)
        }
        Pacing::Unthrottled => None,
    };

    let quit = tokio::signal::ctrl_c();
    tokio::pin!(quit);

    info!(?pacing, ?generations, "starting play loop");
    let mut steps = 0;
    while generations.is_none_or(|limit| steps < limit) {
        tokio::select! {
            result = &mut quit => {
                if let Err(e) = result {
                    warn!("failed to listen for Ctrl-C: {e}");
                }
                info!("quit requested");
                break;
            }
            _ = tick(interval.as_mut()) => {
                let report = simulation.step();
                steps += 1;
                on_step(&report, &simulation.snapshot());
            }
        }
    }
    info!(steps, generation = simulation.generation(), "play loop stopped");
    steps
}

async fn tick(interval: Option<&mut time::Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => tokio::task::yield_now().await,
    }
}

/// [`run`] on a fresh single-threaded runtime, for callers without one.
pub fn run_blocking<F>(
    simulation: &mut Simulation,
    pacing: Pacing,
    generations: Option<u64>,
    on_step: F,
) -> Result<u64, DriverError>
where
    F: FnMut(&StepReport, &Snapshot),
{
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    Ok(runtime.block_on(run(simulation, pacing, generations, on_step)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::rule::Rule;

    #[test]
    fn pacing_from_speed() {
        assert_eq!(Pacing::from_speed(4.0), Pacing::Every(Duration::from_millis(250)));
        assert_eq!(Pacing::from_speed(0.5), Pacing::Every(Duration::from_secs(2)));
        assert_eq!(Pacing::from_speed(0.0), Pacing::Unthrottled);
    }

    #[tokio::test]
    async fn stops_at_generation_limit() {
        let grid = Grid::from_live_cells(5, &[(1, 2), (2, 2), (3, 2)]);
        let mut simulation = Simulation::from_grid(grid, Rule::NeighborBased, 2).unwrap();

        let mut seen = Vec::new();
        let steps = run(&mut simulation, Pacing::Unthrottled, Some(3), |report, snapshot| {
            seen.push((report.generation, snapshot.population()));
        })
        .await;

        assert_eq!(steps, 3);
        assert_eq!(simulation.generation(), 3);
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test(start_paused = true)]
    async fn paced_run_waits_between_steps() {
        let mut simulation = Simulation::from_grid(Grid::dead(4), Rule::SeedBased, 1).unwrap();
        let start = time::Instant::now();
        let steps = run(&mut simulation, Pacing::from_speed(10.0), Some(4), |_, _| {}).await;
        assert_eq!(steps, 4);
        // first tick fires immediately, the other three are 100ms apart
        assert!(start.elapsed() >= Duration::from_millis(299));
    }

    #[test]
    fn blocking_wrapper_runs_to_completion() {
        let mut simulation = Simulation::from_grid(Grid::dead(3), Rule::NeighborBased, 1).unwrap();
        let steps = run_blocking(&mut simulation, Pacing::Unthrottled, Some(2), |_, _| {}).unwrap();
        assert_eq!(steps, 2);
    }
}
