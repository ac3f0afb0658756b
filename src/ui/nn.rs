use evo_arena::simulation::agent::{Agent, Perception};
use evo_arena::simulation::arena::OUTPUT_LABELS;
use evo_arena::simulation::snapshot::DecisionTrace;
use egui_macroquad::egui;

pub(super) fn draw_neural_network(ui: &mut egui::Ui, agent: &Agent, trace: &DecisionTrace) {
    // Recompute every layer's activations from the traced inputs
    let mut layer_activations: Vec<ndarray::Array1<f32>> = vec![trace.inputs.clone()];
    let mut current_activation = trace.inputs.clone();
    for layer in &agent.brain.layers {
        current_activation = layer.forward(&current_activation);
        layer_activations.push(current_activation.clone());
    }
    // the network's own output carries the change-vision attenuation
    if let Some(last) = layer_activations.last_mut() {
        *last = trace.outputs.clone();
    }

    let input_labels = Perception::standard().labels();

    let sizes: Vec<String> = agent.brain.layer_sizes().iter().map(ToString::to_string).collect();
    ui.label(format!("Layers: {}", sizes.join(" → ")));

    let width = ui.available_width().min(400.0);
    let height = 260.0;
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let rect = response.rect;

    let layer_count = layer_activations.len();
    let layer_spacing = rect.width() / (layer_count as f32 + 1.0);
    let neuron_y = |idx: usize, count: usize| {
        rect.top() + rect.height() * (idx as f32 + 1.0) / (count as f32 + 1.0)
    };

    // Connections first so neurons are drawn on top
    for (layer_idx, layer) in agent.brain.layers.iter().enumerate() {
        let x1 = rect.left() + layer_spacing * (layer_idx + 1) as f32;
        let x2 = rect.left() + layer_spacing * (layer_idx + 2) as f32;
        let (input_count, output_count) = layer.weights.dim();

        for in_idx in 0..input_count {
            let y1 = neuron_y(in_idx, input_count);
            for out_idx in 0..output_count {
                let y2 = neuron_y(out_idx, output_count);
                let weight = layer.weights[[in_idx, out_idx]];
                let alpha = (weight.abs() * 3.0).min(1.0);
                let color = if weight > 0.0 {
                    egui::Color32::from_rgba_unmultiplied(80, 120, 255, (alpha * 255.0) as u8)
                } else {
                    egui::Color32::from_rgba_unmultiplied(255, 80, 80, (alpha * 255.0) as u8)
                };

                painter.line_segment(
                    [egui::pos2(x1, y1), egui::pos2(x2, y2)],
                    egui::Stroke::new((weight.abs() * 1.5).clamp(0.3, 3.0), color),
                );
            }
        }
    }

    for (layer_idx, activations) in layer_activations.iter().enumerate() {
        let x = rect.left() + layer_spacing * (layer_idx + 1) as f32;
        let neuron_count = activations.len();
        let is_input_layer = layer_idx == 0;
        let is_output_layer = layer_idx == layer_count - 1;

        for (neuron_idx, &activation) in activations.iter().enumerate() {
            let y = neuron_y(neuron_idx, neuron_count);

            let fill = if is_input_layer {
                egui::Color32::LIGHT_GREEN
            } else if is_output_layer {
                egui::Color32::LIGHT_BLUE
            } else {
                egui::Color32::from_rgb(255, 182, 193)
            };
            painter.circle_filled(egui::pos2(x, y), 5.0, fill);
            painter.circle_stroke(egui::pos2(x, y), 5.0, egui::Stroke::new(1.0, egui::Color32::WHITE));

            let label = if is_input_layer {
                input_labels.get(neuron_idx).copied()
            } else if is_output_layer {
                OUTPUT_LABELS.get(neuron_idx).copied()
            } else {
                None
            };

            if let Some(label) = label {
                painter.text(
                    egui::pos2(if is_input_layer { x - 10.0 } else { x + 10.0 }, y),
                    if is_input_layer {
                        egui::Align2::RIGHT_CENTER
                    } else {
                        egui::Align2::LEFT_CENTER
                    },
                    format!("{label}: {activation:.2}"),
                    egui::FontId::proportional(10.0),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}
