use evo_arena::simulation::agent::Team;
use evo_arena::simulation::arena::Arena;
use evo_arena::simulation::event_log::EventKind;
use evo_arena::simulation::snapshot::Snapshot;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};

use super::ui::UIState;

fn team_color(team: Team) -> egui::Color32 {
    match team {
        Team::Blue => egui::Color32::from_rgb(100, 150, 255),
        Team::Red => egui::Color32::from_rgb(255, 100, 100),
    }
}

fn event_color(kind: EventKind) -> egui::Color32 {
    match kind {
        EventKind::Shot => egui::Color32::from_rgb(255, 255, 100),
        EventKind::Hit => egui::Color32::from_rgb(255, 100, 100),
        EventKind::Dodge => egui::Color32::from_rgb(100, 255, 255),
        EventKind::Round => egui::Color32::from_rgb(200, 200, 200),
        EventKind::Generation => egui::Color32::from_rgb(100, 255, 100),
    }
}

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    arena: &Arena,
    snapshot: &Snapshot,
) {
    egui::SidePanel::right("stats_panel")
        .exact_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Arena");
                ui.separator();

                ui.horizontal(|ui| {
                    let toggle = if state.running { "⏸ Pause" } else { "▶ Run" };
                    if ui.button(toggle).clicked() {
                        state.running = !state.running;
                    }
                    if ui.button("⏭ Step").clicked() {
                        state.step_requested = true;
                    }
                    if ui.button("🧬 Evolve").clicked() {
                        state.evolve_requested = true;
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("🏁 Tally round").clicked() {
                        state.tally_requested = true;
                    }
                    if ui.button("🔄 Reset round").clicked() {
                        state.reset_requested = true;
                    }
                });

                if let Some(ref msg) = state.status_message {
                    ui.label(msg);
                }

                ui.separator();

                let elapsed = (arena.now() - snapshot.round_started_at).num_seconds();
                ui.label(format!("Generation: {}", snapshot.generation));
                ui.label(format!("Generation time: {}s", elapsed));
                ui.label(format!("Round ticks: {}", snapshot.round_ticks));
                ui.label(format!("Bullets in flight: {}", snapshot.projectiles.len()));

                ui.separator();

                let scores = arena.scores();
                for team in Team::ALL {
                    let (score, lives) = match team {
                        Team::Blue => (scores.blue_score, scores.blue_lives),
                        Team::Red => (scores.red_score, scores.red_lives),
                    };
                    let agent = arena.agent(team);
                    ui.colored_label(
                        team_color(team),
                        format!(
                            "{team}: score {score}, lives {lives}, hits {}, streak {}",
                            agent.bullets_hit, agent.consecutive_hits
                        ),
                    );
                }

                ui.separator();
                ui.label("Display score history");
                Plot::new("score_history_plot")
                    .height(150.0)
                    .show_axes([true, true])
                    .label_formatter(|name, value| {
                        format!("{}: tick {:.0}, score {:.0}", name, value.x, value.y)
                    })
                    .show(ui, |plot_ui| {
                        for (team, history) in [
                            (Team::Blue, &state.blue_score_history),
                            (Team::Red, &state.red_score_history),
                        ] {
                            let points: PlotPoints = history.iter().map(|&(x, y)| [x, y]).collect();
                            plot_ui.line(
                                Line::new(points)
                                    .color(team_color(team))
                                    .name(team.name()),
                            );
                        }
                    });

                ui.separator();
                ui.collapsing("Recent events", |ui| {
                    for event in arena.event_log.iter() {
                        ui.colored_label(
                            event_color(event.kind),
                            format!("[{}] {}: {}", event.tick, event.kind.label(), event.description),
                        );
                    }
                });

                for team in Team::ALL {
                    ui.collapsing(format!("{team} network"), |ui| {
                        super::nn::draw_neural_network(
                            ui,
                            arena.agent(team),
                            snapshot.network(team),
                        );
                    });
                }
            });
        });
}
