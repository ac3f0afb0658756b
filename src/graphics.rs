use evo_arena::simulation::agent::Team;
use evo_arena::simulation::params::Params;
use evo_arena::simulation::projectile::Projectile;
use evo_arena::simulation::snapshot::Snapshot;
use evo_arena::simulation::world::AgentView;
use macroquad::prelude::*;

const BULLET_RADIUS: f32 = 3.0;
const BULLET_TRAIL: f32 = 10.0;
const VISION_CONE_SEGMENTS: usize = 24;

/// Maps arena coordinates onto the part of the window left of the side panel.
pub struct Viewport {
    scale: f32,
    offset: Vec2,
}

impl Viewport {
    pub fn fit(params: &Params, available_width: f32) -> Self {
        let margin = 10.0;
        let scale_x = (available_width - 2.0 * margin) / params.arena_width;
        let scale_y = (screen_height() - 2.0 * margin) / params.arena_height;
        let scale = scale_x.min(scale_y).max(0.01);
        Self {
            scale,
            offset: vec2(margin, margin),
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        self.offset + vec2(x, y) * self.scale
    }

    fn len(&self, length: f32) -> f32 {
        length * self.scale
    }
}

fn team_color(team: Team) -> Color {
    match team {
        Team::Blue => BLUE,
        Team::Red => RED,
    }
}

fn draw_vision_cone(viewport: &Viewport, bot: &AgentView, radius: f32) {
    let center = viewport.to_screen(bot.x, bot.y);
    let radius = viewport.len(radius);
    let color = match bot.team {
        Team::Blue => Color::new(0.0, 0.0, 1.0, 0.2),
        Team::Red => Color::new(1.0, 0.0, 0.0, 0.2),
    };

    let start = bot.heading - bot.vision_field / 2.0;
    let step = bot.vision_field / VISION_CONE_SEGMENTS as f32;
    for i in 0..VISION_CONE_SEGMENTS {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        draw_triangle(
            center,
            center + vec2(a0.cos(), a0.sin()) * radius,
            center + vec2(a1.cos(), a1.sin()) * radius,
            color,
        );
    }
}

fn draw_bot(viewport: &Viewport, bot: &AgentView, params: &Params) {
    let body_radius = params.hit_radius;
    draw_vision_cone(viewport, bot, body_radius * 5.0);

    let center = viewport.to_screen(bot.x, bot.y);
    let radius = viewport.len(body_radius);
    draw_circle(center.x, center.y, radius, team_color(bot.team));

    // heading tick
    let tip = center + vec2(bot.heading.cos(), bot.heading.sin()) * radius;
    draw_line(center.x, center.y, tip.x, tip.y, 1.0, WHITE);

    if bot.has_fired {
        draw_circle_lines(center.x, center.y, radius + viewport.len(5.0), 2.0, YELLOW);
    }
    if !bot.can_fire {
        draw_circle_lines(center.x, center.y, radius + viewport.len(5.0), 2.0, GRAY);
    }
}

fn draw_bullet(viewport: &Viewport, bullet: &Projectile) {
    let center = viewport.to_screen(bullet.x, bullet.y);
    let (body, trail) = match bullet.team {
        Team::Blue => (DARKBLUE, BLUE),
        Team::Red => (MAROON, RED),
    };
    draw_circle(center.x, center.y, viewport.len(BULLET_RADIUS), body);

    let tip = center + vec2(bullet.heading.cos(), bullet.heading.sin()) * viewport.len(BULLET_TRAIL);
    draw_line(center.x, center.y, tip.x, tip.y, 1.0, trail);
}

/// Draws the field, both bots, all bullets and the lives counters.
pub fn draw_arena(snapshot: &Snapshot, params: &Params, viewport: &Viewport) {
    let top_left = viewport.to_screen(0.0, 0.0);
    let size = vec2(viewport.len(params.arena_width), viewport.len(params.arena_height));
    draw_rectangle(top_left.x, top_left.y, size.x, size.y, Color::from_rgba(245, 245, 245, 255));
    draw_rectangle_lines(top_left.x, top_left.y, size.x, size.y, 2.0, DARKGRAY);

    let mid_top = viewport.to_screen(params.arena_width / 2.0, 0.0);
    let mid_bottom = viewport.to_screen(params.arena_width / 2.0, params.arena_height);
    draw_line(mid_top.x, mid_top.y, mid_bottom.x, mid_bottom.y, 1.0, BLACK);

    for team in Team::ALL {
        draw_bot(viewport, snapshot.agent(team), params);
    }
    for bullet in &snapshot.projectiles {
        draw_bullet(viewport, bullet);
    }

    let font_size = 20.0;
    draw_text(
        &format!("Lives: {}", snapshot.blue.lives),
        top_left.x + 10.0,
        top_left.y + 30.0,
        font_size,
        BLUE,
    );
    let red_label = format!("Lives: {}", snapshot.red.lives);
    let red_width = measure_text(&red_label, None, font_size as u16, 1.0).width;
    draw_text(
        &red_label,
        top_left.x + size.x - red_width - 10.0,
        top_left.y + 30.0,
        font_size,
        RED,
    );
}
