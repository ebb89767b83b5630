// ui.rs - egui frontend: renders the board and wires the controls

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use life_core::{CellState, PATTERNS, Simulation};

const CELL_SIZE: f32 = 15.0;
const CELL_SPACING: f32 = 0.5;

pub struct LifeApp {
    sim: Simulation,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            sim: Simulation::default(),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        }
    }
}

/// Map a pointer position to the cell under it, if any. Positions in the
/// spacing gutters between cells map to nothing.
fn cell_at(pos: Pos2, origin: Pos2, width: usize, height: usize) -> Option<(usize, usize)> {
    let pitch = CELL_SIZE + CELL_SPACING;
    let dx = pos.x - origin.x;
    let dy = pos.y - origin.y;
    if dx < 0.0 || dy < 0.0 {
        return None;
    }
    let x = (dx / pitch) as usize;
    let y = (dy / pitch) as usize;
    if x >= width || y >= height {
        return None;
    }
    if dx - x as f32 * pitch > CELL_SIZE || dy - y as f32 * pitch > CELL_SIZE {
        return None; // in the gutter
    }
    Some((x, y))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance auto-play when a tick is due
        self.sim.poll(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("Step").clicked() {
                    self.sim.step();
                }

                let play_label = if self.sim.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Play"
                };
                if ui.button(play_label).clicked() {
                    self.sim.toggle_autoplay(Instant::now());
                }

                if ui.button("🎲 Reset").clicked() {
                    self.sim.reset();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.sim.clear();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.sim.stop_autoplay();
                    if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
                        self.sim.apply_pattern(pattern);
                    }
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.sim.generation()));
            });

            ui.separator();

            // Speed, colors, cycle halt
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.sim.period().as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.sim
                        .set_period(Duration::from_millis((1000.0 / speed) as u64));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);

                ui.separator();

                let mut halt = self.sim.halt_on_cycle();
                if ui.checkbox(&mut halt, "Pause on repeat").changed() {
                    self.sim.set_halt_on_cycle(halt);
                }
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead.");

            ui.separator();

            // Draw the board
            let (width, height) = {
                let grid = self.sim.grid();
                (grid.width(), grid.height())
            };
            let pitch = CELL_SIZE + CELL_SPACING;
            let board_size = Vec2::new(
                pitch * width as f32 - CELL_SPACING,
                pitch * height as f32 - CELL_SPACING,
            );

            let origin = ui.cursor().min;
            let (response, painter) = ui.allocate_painter(board_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(Rect::from_min_size(origin, board_size), 0.0, Color32::BLACK);

            {
                let grid = self.sim.grid();
                for y in 0..height {
                    for x in 0..width {
                        let rect = Rect::from_min_size(
                            egui::pos2(origin.x + x as f32 * pitch, origin.y + y as f32 * pitch),
                            Vec2::splat(CELL_SIZE),
                        );

                        let color = if grid.get(x, y) == CellState::Alive {
                            self.live_color
                        } else {
                            self.dead_color
                        };

                        painter.rect_filled(rect, 1.0, color);
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }
                }
            }

            // One delegated click handler for the whole board
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((x, y)) = cell_at(pos, origin, width, height) {
                        self.sim.toggle_cell(x, y);
                    }
                }
            }

            ui.separator();

            // Statistics
            let live = self.sim.grid().population();
            let total = width * height;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!(
                    "Population: {:.1}%",
                    live as f32 / total as f32 * 100.0
                ));
            });
        });

        // Keep the frame loop ticking while auto-play runs
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}
