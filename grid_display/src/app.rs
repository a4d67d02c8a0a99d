// app.rs - egui front-end: draws the latest snapshot and steps on a timer

use std::time::Instant;

use conway::driver::Pacing;
use conway::{Config, Simulation, Snapshot, StepReport};
use eframe::egui;
use egui::{Color32, Rect, Vec2};
use tracing::info;

pub struct LifeApp {
    simulation: Simulation,
    snapshot: Snapshot,
    pacing: Pacing,
    zoom: f32,
    pub is_running: bool,
    pub last_update: Instant,
    last_report: Option<StepReport>,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl LifeApp {
    pub fn new(simulation: Simulation, config: &Config) -> Self {
        Self {
            snapshot: simulation.snapshot(),
            simulation,
            pacing: Pacing::from_speed(config.speed),
            zoom: config.zoom as f32,
            is_running: true,
            last_update: Instant::now(),
            last_report: None,
            live_color: Color32::from_rgb(150, 150, 150),
            dead_color: Color32::BLACK,
        }
    }

    /// Window size that fits the whole grid plus the control strip.
    pub fn inner_size(config: &Config) -> [f32; 2] {
        let side = config.size as f32 * config.zoom as f32;
        [side.max(320.0) + 16.0, side + 96.0]
    }

    fn due(&self) -> bool {
        match self.pacing {
            Pacing::Every(period) => self.last_update.elapsed() >= period,
            Pacing::Unthrottled => true,
        }
    }

    fn advance(&mut self) {
        let report = self.simulation.step();
        if report.repeated && !self.last_report.is_some_and(|last| last.repeated) {
            info!(generation = report.generation, "grid entered a cycle");
        }
        self.snapshot = self.simulation.snapshot();
        self.last_report = Some(report);
        self.last_update = Instant::now();
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_running && self.due() {
            self.advance();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() && !self.is_running {
                    self.advance();
                }

                ui.separator();
                ui.label(format!("Generation: {}", self.simulation.generation()));
                ui.label(format!("Rule: {}", self.simulation.rule()));

                if let Some(report) = &self.last_report {
                    ui.separator();
                    ui.label(format!("Step: {:.2} ms", report.elapsed.as_secs_f64() * 1000.0));
                    if report.repeated {
                        ui.label("(repeating)");
                    }
                }
            });

            ui.separator();

            let size = self.snapshot.size();
            let total_size = Vec2::splat(self.zoom * size as f32);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);
            for (x, y) in self.snapshot.live_cells() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(x as f32 * self.zoom, y as f32 * self.zoom),
                    Vec2::splat(self.zoom),
                );
                painter.rect_filled(rect, 0.0, self.live_color);
            }

            ui.separator();

            let live_cells = self.snapshot.population();
            let total = size * size;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep stepping while running
        if self.is_running {
            match self.pacing {
                Pacing::Every(period) => {
                    ctx.request_repaint_after(period.saturating_sub(self.last_update.elapsed()))
                }
                Pacing::Unthrottled => ctx.request_repaint(),
            }
        }
    }
}
