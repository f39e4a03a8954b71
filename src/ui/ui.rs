use segregation::simulation::model::Simulation;
use egui_macroquad::egui;

/// Interactive state of the control panel, kept between frames.
pub struct UIState {
    pub panel_width: f32,
    pub paused: bool,
    pub step_requested: bool,
    pub reset_requested: bool,
    pub status_message: Option<String>,
    /// Threshold shown on the slider; applied to the simulation when it changes.
    pub threshold: f64,
    /// Delay between ticks in milliseconds.
    pub interval_ms: f64,
    pub last_relocations: usize,
    pub unsatisfied: usize,
}

impl UIState {
    pub fn new(threshold: f64, interval_ms: f64) -> Self {
        Self {
            panel_width: 260.0,
            paused: false,
            step_requested: false,
            reset_requested: false,
            status_message: None,
            threshold,
            interval_ms,
            last_relocations: 0,
            unsatisfied: 0,
        }
    }

    /// Whether the frame loop should run a tick even if the timer is not due.
    pub fn take_step_request(&mut self) -> bool {
        std::mem::take(&mut self.step_requested)
    }

    /// Whether the frame loop should regenerate the world.
    pub fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }
}

pub fn draw_ui(state: &mut UIState, simulation: &Simulation) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        super::controls::draw_control_panel(egui_ctx, state, simulation);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
