// UI module - setup screen and in-run control panel

mod controls;
mod genesis;
mod ui;

// Re-export the public interface
pub use genesis::draw_genesis_screen;
pub use ui::{UIState, draw_ui, process_egui};
