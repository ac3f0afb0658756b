use evo_arena::simulation::arena::Arena;
use evo_arena::simulation::params::Params;
use macroquad::prelude::*;
use tracing::{error, info};

mod graphics;
mod ui;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Loads parameters from the JSON file named on the command line, if any.
fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };

    match Params::load_from_file(&path) {
        Ok(params) => {
            info!(%path, "loaded parameters");
            params
        }
        Err(err) => {
            error!(%path, %err, "failed to load parameters, using defaults");
            Params::default()
        }
    }
}

#[macroquad::main("Evo Arena")]
async fn main() {
    init_tracing();

    let mut arena = match Arena::new(load_params()) {
        Ok(arena) => arena,
        Err(err) => {
            error!(%err, "invalid parameters");
            return;
        }
    };

    info!(seed = ?arena.params.seed, "starting arena");

    let mut ui_state = ui::UIState::new();
    let mut tick_timer = 0.0;
    let mut generation_timer = 0.0;

    loop {
        clear_background(Color::from_rgba(30, 30, 30, 255));

        let dt = get_frame_time();
        let mut ticks = 0;

        if ui_state.running {
            tick_timer += dt;
            generation_timer += dt;

            while tick_timer >= arena.params.tick_interval_secs {
                tick_timer -= arena.params.tick_interval_secs;
                ticks += 1;
            }
        }
        if std::mem::take(&mut ui_state.step_requested) {
            ticks += 1;
        }

        for _ in 0..ticks {
            arena.step();
            ui_state.record_tick(&arena);
        }

        if ui_state.running && generation_timer >= arena.params.generation_secs {
            generation_timer = 0.0;
            let outcome = arena.tally_round_outcome();
            let (blue, red) = arena.display_scores();
            info!(?outcome, blue, red, "round finished");
            ui_state.evolve_requested = true;
        }
        if std::mem::take(&mut ui_state.tally_requested) {
            let outcome = arena.tally_round_outcome();
            ui_state.status_message = Some(format!("Round outcome: {outcome:?}"));
        }
        if std::mem::take(&mut ui_state.evolve_requested) {
            let generation = arena.evolve();
            generation_timer = 0.0;
            ui_state.status_message = Some(format!("Evolved to generation {generation}"));
        }
        if std::mem::take(&mut ui_state.reset_requested) {
            arena.reset_round();
            ui_state.status_message = Some("Round reset".to_string());
        }

        let snapshot = arena.snapshot();

        let viewport =
            graphics::Viewport::fit(&arena.params, screen_width() - ui_state.stats_panel_width);
        graphics::draw_arena(&snapshot, &arena.params, &viewport);

        ui::draw_ui(&mut ui_state, &arena, &snapshot);
        ui::process_egui();

        next_frame().await
    }
}
