// main.rs - Entry point: parse flags, set up logging, run with or without a window

use anyhow::Context;
use clap::Parser;
use conway::driver::{self, Pacing};
use conway::{Config, Simulation};
use eframe::egui;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;

use app::LifeApp;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = cli.config();
    let simulation = Simulation::new(&config).context("invalid configuration")?;

    if config.with_gui {
        run_gui(simulation, &config)
    } else {
        run_headless(simulation, &config, cli.generations, cli.print)
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run_gui(simulation: Simulation, config: &Config) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(LifeApp::inner_size(config)),
        ..Default::default()
    };

    let app = LifeApp::new(simulation, config);
    eframe::run_native("Conway's Game of Life", options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("window closed with an error: {e}"))
}

fn run_headless(
    mut simulation: Simulation,
    config: &Config,
    generations: Option<u64>,
    print: bool,
) -> anyhow::Result<()> {
    if print {
        println!("generation 0\n{}", simulation.snapshot());
    }

    driver::run_blocking(&mut simulation, Pacing::from_speed(config.speed), generations, |report, snapshot| {
        if report.repeated {
            debug!(generation = report.generation, "grid repeats a recent generation");
        }
        if print {
            println!("generation {}\n{snapshot}", report.generation);
        }
    })?;
    Ok(())
}
