use segregation::simulation::params::Params;
use egui_macroquad::egui;
use macroquad::prelude::*;

/// Draws the setup screen and returns `true` once the user starts the run.
///
/// The empty fraction is derived from the red and blue sliders so the
/// distribution always sums to one; the start button stays disabled while
/// the parameters are invalid.
pub fn draw_genesis_screen(params: &mut Params) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_simulation = false;

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            ui.heading("Segregation Simulation - Configuration");
            ui.add_space(10.0);

            ui.collapsing("World", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.n_locations, 4..=250_000)
                        .logarithmic(true)
                        .text("Locations"),
                );
                let dim = params.n_locations.isqrt();
                ui.label(format!("Grid: {dim} x {dim}"));
            });

            ui.collapsing("Population", |ui| {
                let dist = &mut params.distribution;
                ui.add(egui::Slider::new(&mut dist.red, 0.0..=1.0).text("Red"));
                dist.blue = dist.blue.min(1.0 - dist.red);
                ui.add(egui::Slider::new(&mut dist.blue, 0.0..=1.0 - dist.red).text("Blue"));
                dist.empty = (1.0 - dist.red - dist.blue).max(0.0);
                ui.label(format!("Empty: {:.2}", dist.empty));
            });

            ui.collapsing("Behaviour", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.threshold, 0.0..=1.0)
                        .text("Like-neighbour threshold"),
                );

                let mut fixed_seed = params.seed.is_some();
                ui.checkbox(&mut fixed_seed, "Fixed seed");
                match (fixed_seed, params.seed) {
                    (true, None) => params.seed = Some(0),
                    (false, Some(_)) => params.seed = None,
                    _ => {}
                }
                if let Some(seed) = params.seed.as_mut() {
                    ui.add(egui::DragValue::new(seed).prefix("Seed: "));
                }
            });

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);

            let validation = params.validate();
            ui.horizontal(|ui| {
                let start = ui.add_enabled(validation.is_ok(), egui::Button::new("Start Simulation"));
                if start.clicked() {
                    start_simulation = true;
                }
                match &validation {
                    Ok(()) => ui.label("Configure parameters above, then click to start"),
                    Err(error) => ui.colored_label(egui::Color32::from_rgb(200, 60, 60), error.to_string()),
                };
            });
        });
    });

    egui_macroquad::draw();

    start_simulation
}
