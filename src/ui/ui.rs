use evo_arena::simulation::arena::Arena;
use evo_arena::simulation::snapshot::Snapshot;
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

#[allow(clippy::struct_excessive_bools)]
pub struct UIState {
    pub stats_panel_width: f32,
    pub blue_score_history: VecDeque<(f64, f64)>,
    pub red_score_history: VecDeque<(f64, f64)>,
    pub running: bool,
    pub step_requested: bool,
    pub evolve_requested: bool,
    pub reset_requested: bool,
    pub tally_requested: bool,
    pub status_message: Option<String>,
    total_ticks: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 420.0,
            blue_score_history: VecDeque::new(),
            red_score_history: VecDeque::new(),
            running: true,
            step_requested: false,
            evolve_requested: false,
            reset_requested: false,
            tally_requested: false,
            status_message: None,
            total_ticks: 0,
        }
    }

    /// Records the display scores after a tick.
    pub fn record_tick(&mut self, arena: &Arena) {
        self.total_ticks += 1;
        let (blue, red) = arena.display_scores();
        let x = self.total_ticks as f64;

        self.blue_score_history.push_back((x, blue as f64));
        self.red_score_history.push_back((x, red as f64));

        if self.blue_score_history.len() > MAX_HISTORY_POINTS {
            self.blue_score_history.pop_front();
        }
        if self.red_score_history.len() > MAX_HISTORY_POINTS {
            self.red_score_history.pop_front();
        }
    }
}

pub fn draw_ui(state: &mut UIState, arena: &Arena, snapshot: &Snapshot) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, arena, snapshot);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
