// UI module - handles all user interface rendering

mod nn;
mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
