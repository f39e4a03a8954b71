use segregation::simulation::model::Simulation;
use egui_macroquad::egui;

use super::ui::UIState;

pub(super) fn draw_control_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    simulation: &Simulation,
) {
    egui::SidePanel::right("control_panel")
        .default_width(state.panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Segregation");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.add_enabled(state.paused, egui::Button::new("⏭ Step")).clicked() {
                    state.step_requested = true;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.label("Like-neighbour threshold");
            ui.add(egui::Slider::new(&mut state.threshold, 0.0..=1.0));

            ui.label("Tick interval");
            ui.add(egui::Slider::new(&mut state.interval_ms, 0.0..=2000.0).suffix(" ms"));

            ui.separator();

            let dim = simulation.world().dim();
            ui.label(format!("Grid: {dim} x {dim}"));
            ui.label(format!("Seed: {}", simulation.seed()));
            ui.label(format!("Tick: {}", simulation.tick()));
            ui.label(format!("Moved last tick: {}", state.last_relocations));
            ui.label(format!("Unsatisfied: {}", state.unsatisfied));
        });
}
